use crate::dtos::{
    DocumentChanges, MessageResponse, NewDocument, PropertyRequest, PropertyResponse,
    PropertyUpdate,
};
use crate::models::document_to_json;
use crate::services::is_duplicate_key_error;
use crate::utils::ValidatedJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use service_core::error::AppError;

fn duplicate_property() -> AppError {
    AppError::BadRequest(anyhow::anyhow!("Property with this ID already exists."))
}

/// Get all properties
///
/// Listings are returned as stored, including fields outside the documented
/// shape.
#[utoipa::path(
    get,
    path = "/api/properties",
    responses(
        (status = 200, description = "Successful response with the properties data", body = [PropertyResponse]),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Properties"
)]
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let cursor = state
        .db
        .properties()
        .find(doc! {}, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query properties: {}", e);
            AppError::from(e)
        })?;

    let properties: Vec<Document> = cursor.try_collect().await.map_err(|e| {
        tracing::error!("Failed to read properties cursor: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(properties.into_iter().map(document_to_json).collect()))
}

/// Get a property by ID
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    params(
        ("id" = String, Path, description = "ID of the property to retrieve")
    ),
    responses(
        (status = 200, description = "Successful response with the property data", body = PropertyResponse),
        (status = 404, description = "Property not found", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Properties"
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let property = state
        .db
        .properties()
        .find_one(doc! { "id": &id }, None)
        .await
        .map_err(|e| {
            tracing::error!(property_id = %id, "Failed to look up property: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Property not found")))?;

    Ok(Json(document_to_json(property)))
}

/// Create a new property
///
/// Fields besides `id` are stored exactly as sent.
#[utoipa::path(
    post,
    path = "/api/properties",
    request_body = PropertyRequest,
    responses(
        (status = 201, description = "Property created successfully", body = MessageResponse),
        (status = 400, description = "Bad request. Check your request data.", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Properties"
)]
pub async fn create_property(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<NewDocument>,
) -> Result<impl IntoResponse, AppError> {
    let properties = state.db.properties();

    let existing = properties
        .count_documents(doc! { "id": &req.id }, None)
        .await
        .map_err(|e| {
            tracing::error!(property_id = %req.id, "Failed to check for existing property: {}", e);
            AppError::from(e)
        })?;
    if existing > 0 {
        return Err(duplicate_property());
    }

    let property_id = req.id.clone();
    let property = req.into_document()?;
    properties
        .insert_one(property, None)
        .await
        .map_err(|e| {
            if is_duplicate_key_error(&e) {
                return duplicate_property();
            }
            tracing::error!(property_id = %property_id, "Failed to insert property: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(property_id = %property_id, "Property created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Successfully added a new property.")),
    ))
}

/// Update a property by ID
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    params(
        ("id" = String, Path, description = "ID of the property to update")
    ),
    request_body = PropertyUpdate,
    responses(
        (status = 200, description = "Property updated successfully", body = MessageResponse),
        (status = 400, description = "Bad request. Check your request data.", body = MessageResponse),
        (status = 404, description = "Property not found", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Properties"
)]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<DocumentChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    let set = changes.into_set_document()?;
    if set.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Bad request. Property data is required."
        )));
    }

    tracing::debug!(property_id = %id, fields = ?set.keys().collect::<Vec<_>>(), "Updating property");

    let result = state
        .db
        .properties()
        .update_one(doc! { "id": &id }, doc! { "$set": set }, None)
        .await
        .map_err(|e| {
            if is_duplicate_key_error(&e) {
                return duplicate_property();
            }
            tracing::error!(property_id = %id, "Failed to update property: {}", e);
            AppError::from(e)
        })?;

    if result.matched_count != 1 {
        return Err(AppError::NotFound(anyhow::anyhow!("Property not found.")));
    }

    tracing::info!(property_id = %id, "Property updated");

    Ok(Json(MessageResponse::new(
        "Successfully updated an existing property.",
    )))
}

/// Delete a property by ID
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    params(
        ("id" = String, Path, description = "ID of the property to delete")
    ),
    responses(
        (status = 200, description = "Property deleted successfully", body = MessageResponse),
        (status = 404, description = "Property not found", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Properties"
)]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = state
        .db
        .properties()
        .delete_one(doc! { "id": &id }, None)
        .await
        .map_err(|e| {
            tracing::error!(property_id = %id, "Failed to delete property: {}", e);
            AppError::from(e)
        })?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Property not found")));
    }

    tracing::info!(property_id = %id, "Property deleted");

    Ok(Json(MessageResponse::new("Property deleted successfully")))
}
