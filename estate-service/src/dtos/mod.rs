pub mod app_state;
pub mod documents;
pub mod properties;

pub use app_state::{AppStateRequest, AppStateResponse, AppStateUpdate, ViewMode};
pub use documents::{DocumentChanges, NewDocument};
pub use properties::{PropertyDetails, PropertyRequest, PropertyResponse, PropertyUpdate};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Successfully added a new property.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
