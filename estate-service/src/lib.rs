pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use crate::config::EstateConfig;
use crate::services::MongoDb;
use utoipa::OpenApi;

pub use startup::{build_router, Application};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Real Estate Manager API",
        version = "1.0.0",
        description = "API documentation Real Estate Manager application."
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::properties::list_properties,
        handlers::properties::get_property,
        handlers::properties::create_property,
        handlers::properties::update_property,
        handlers::properties::delete_property,
        handlers::support::list_pages,
        handlers::support::list_support,
        handlers::app_state::list_app_states,
        handlers::app_state::create_app_state,
        handlers::app_state::update_app_state,
    ),
    components(
        schemas(
            dtos::MessageResponse,
            dtos::PropertyDetails,
            dtos::PropertyRequest,
            dtos::PropertyUpdate,
            dtos::PropertyResponse,
            dtos::AppStateRequest,
            dtos::AppStateUpdate,
            dtos::AppStateResponse,
            dtos::ViewMode,
        )
    ),
    tags(
        (name = "Properties", description = "API endpoints for managing properties."),
        (name = "Support", description = "API endpoints for support-related functionalities."),
        (name = "AppState", description = "API endpoints for app-wide functionalities."),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: EstateConfig,
    pub db: MongoDb,
}
