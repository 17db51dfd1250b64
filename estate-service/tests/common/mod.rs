#![allow(dead_code)]

use estate_service::config::{EstateConfig, Environment, MongoConfig, SecurityConfig};
use estate_service::services::MongoDb;
use estate_service::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

/// Points at a port nothing listens on; routes that fail before touching the
/// database never notice.
pub const UNREACHABLE_MONGO_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

pub fn test_config(uri: &str, database: &str) -> EstateConfig {
    EstateConfig {
        common: CoreConfig { port: 0 },
        environment: Environment::Dev,
        service_name: "estate-service-test".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        mongodb: MongoConfig {
            uri: uri.to_string(),
            database: database.to_string(),
        },
        security: SecurityConfig {
            allowed_origins: vec!["*".to_string()],
        },
        swagger_enabled: true,
    }
}

/// Router wired to a database that is never reachable.
pub async fn offline_router() -> axum::Router {
    let config = test_config(UNREACHABLE_MONGO_URI, "estate_offline_test");
    let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
        .await
        .expect("Failed to create MongoDB client");
    build_router(AppState { config, db })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application against a fresh database on `MONGO_URI`.
    pub async fn spawn() -> Self {
        dotenvy::dotenv().ok();
        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("estate_test_{}", Uuid::new_v4().simple());

        let app = Application::build(test_config(&uri, &db_name))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/ready", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
