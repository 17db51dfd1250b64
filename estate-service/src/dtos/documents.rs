use crate::models::json_to_document;
use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::{Map, Value};
use service_core::error::AppError;
use validator::Validate;

/// Body of a create request.
///
/// `id` must be a non-empty string because every route looks documents up by
/// it. All other fields are stored as sent.
#[derive(Debug, Deserialize, Validate)]
pub struct NewDocument {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewDocument {
    pub fn into_document(self) -> Result<Document, AppError> {
        let mut document = Document::new();
        document.insert("id", self.id);
        for (key, value) in json_to_document(self.fields)? {
            document.insert(key, value);
        }
        Ok(document)
    }
}

/// Body of a partial update. Every supplied field is `$set` as sent.
#[derive(Debug, Deserialize, Validate)]
pub struct DocumentChanges {
    #[serde(default)]
    #[validate(length(min = 1, message = "id cannot be empty"))]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DocumentChanges {
    /// The `$set` payload; empty when the request carried no fields.
    ///
    /// `_id` is immutable in MongoDB, so an echoed `_id` is dropped.
    pub fn into_set_document(self) -> Result<Document, AppError> {
        let mut fields = self.fields;
        fields.remove("_id");

        let mut set = Document::new();
        if let Some(id) = self.id {
            set.insert("id", id);
        }
        for (key, value) in json_to_document(fields)? {
            set.insert(key, value);
        }
        Ok(set)
    }
}
