//! Listings, view toggles and FAQs are stored as schemaless documents; the
//! typed shapes in `dtos` only describe them for OpenAPI.
pub mod document;

pub use document::{document_to_json, json_to_document};
