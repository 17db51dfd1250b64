use crate::dtos::{
    AppStateRequest, AppStateResponse, AppStateUpdate, DocumentChanges, MessageResponse,
    NewDocument,
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

fn duplicate_app_state() -> AppError {
    AppError::BadRequest(anyhow::anyhow!("AppState with this ID already exists."))
}

/// Get the state of the View Properties toggle switch
#[utoipa::path(
    get,
    path = "/api/viewPropertiesToggleState",
    responses(
        (status = 200, description = "Successful response getting viewPropertiesToggleState state", body = [AppStateResponse]),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "AppState"
)]
pub async fn list_app_states(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let cursor = state
        .db
        .app_states()
        .find(doc! {}, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query app states: {}", e);
            AppError::from(e)
        })?;

    let app_states: Vec<Document> = cursor.try_collect().await.map_err(|e| {
        tracing::error!("Failed to read app states cursor: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(app_states.into_iter().map(document_to_json).collect()))
}

/// Create a new App State
#[utoipa::path(
    post,
    path = "/api/viewPropertiesToggleState",
    request_body = AppStateRequest,
    responses(
        (status = 201, description = "App State created successfully", body = MessageResponse),
        (status = 400, description = "Bad request. Check your request data.", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "AppState"
)]
pub async fn create_app_state(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<NewDocument>,
) -> Result<impl IntoResponse, AppError> {
    let app_states = state.db.app_states();

    let existing = app_states
        .count_documents(doc! { "id": &req.id }, None)
        .await
        .map_err(|e| {
            tracing::error!(app_state_id = %req.id, "Failed to check for existing app state: {}", e);
            AppError::from(e)
        })?;
    if existing > 0 {
        return Err(duplicate_app_state());
    }

    let app_state_id = req.id.clone();
    let app_state = req.into_document()?;
    tracing::debug!(app_state_id = %app_state_id, view_mode = ?app_state.get("viewMode"), "Creating App State");

    app_states
        .insert_one(app_state, None)
        .await
        .map_err(|e| {
            if is_duplicate_key_error(&e) {
                return duplicate_app_state();
            }
            tracing::error!(app_state_id = %app_state_id, "Failed to insert app state: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(app_state_id = %app_state_id, "App State created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Successfully added a App State.")),
    ))
}

/// Update a App State by ID
#[utoipa::path(
    put,
    path = "/api/viewPropertiesToggleState/{id}",
    params(
        ("id" = String, Path, description = "ID of the App State to update")
    ),
    request_body = AppStateUpdate,
    responses(
        (status = 200, description = "App State updated successfully", body = MessageResponse),
        (status = 400, description = "Bad request. Check your request data.", body = MessageResponse),
        (status = 404, description = "App State not found", body = MessageResponse),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "AppState"
)]
pub async fn update_app_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<DocumentChanges>,
) -> Result<Json<MessageResponse>, AppError> {
    let set = changes.into_set_document()?;
    if set.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Bad request. App State data is required."
        )));
    }

    let result = state
        .db
        .app_states()
        .update_one(doc! { "id": &id }, doc! { "$set": set }, None)
        .await
        .map_err(|e| {
            if is_duplicate_key_error(&e) {
                return duplicate_app_state();
            }
            tracing::error!(app_state_id = %id, "Failed to update app state: {}", e);
            AppError::from(e)
        })?;

    if result.matched_count != 1 {
        return Err(AppError::NotFound(anyhow::anyhow!("App State not found.")));
    }

    tracing::info!(app_state_id = %id, "App State updated");

    Ok(Json(MessageResponse::new(
        "Successfully updated an existing App State.",
    )))
}
