use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};
use service_core::error::AppError;

/// Renders a stored document as plain JSON.
///
/// ObjectIds become hex strings and dates become RFC 3339 strings at any
/// depth. Every other value follows relaxed Extended JSON, so numbers keep
/// whatever type they were stored with.
pub fn document_to_json(document: Document) -> Value {
    bson_to_json(Bson::Document(document))
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// Converts client-supplied JSON fields into BSON without interpreting them.
pub fn json_to_document(fields: Map<String, Value>) -> Result<Document, AppError> {
    bson::to_document(&fields)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Bad request. {}", e)))
}
