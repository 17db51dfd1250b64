use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

pub const PROPERTIES_COLLECTION: &str = "properties";
pub const APP_STATE_COLLECTION: &str = "appState";
pub const SUPPORT_COLLECTION: &str = "support";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Handle to the estate database.
///
/// The driver client pools connections internally, so clones are cheap and
/// every request borrows a connection for exactly one operation.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    /// Unique `id` indexes back the duplicate checks done on create.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for estate-service");

        for collection in [PROPERTIES_COLLECTION, APP_STATE_COLLECTION] {
            let index = IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .name(format!("{}_id_unique", collection))
                        .unique(true)
                        .build(),
                )
                .build();

            self.db
                .collection::<Document>(collection)
                .create_index(index, None)
                .await
                .map_err(|e| {
                    tracing::error!(
                        collection = %collection,
                        "Failed to create unique id index: {}",
                        e
                    );
                    AppError::from(e)
                })?;
            tracing::info!(collection = %collection, "Created unique index on id");
        }

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    // Documents are read and written as stored; nothing enforces a schema.
    pub fn properties(&self) -> Collection<Document> {
        self.db.collection(PROPERTIES_COLLECTION)
    }

    pub fn app_states(&self) -> Collection<Document> {
        self.db.collection(APP_STATE_COLLECTION)
    }

    pub fn faqs(&self) -> Collection<Document> {
        self.db.collection(SUPPORT_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// True when a write collided with the unique `id` index.
pub fn is_duplicate_key_error(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use mongodb::error::WriteError;

    fn write_error(code: i32) -> MongoError {
        let write_error: WriteError = bson::from_document(doc! {
            "code": code,
            "errmsg": "E11000 duplicate key error collection: PROD.properties index: properties_id_unique",
        })
        .unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn unique_index_violation_is_a_duplicate_key() {
        assert!(is_duplicate_key_error(&write_error(DUPLICATE_KEY_CODE)));
    }

    #[test]
    fn other_write_errors_are_not_duplicates() {
        // 121: document failed validation
        assert!(!is_duplicate_key_error(&write_error(121)));
    }
}
