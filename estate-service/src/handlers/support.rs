use crate::dtos::MessageResponse;
use crate::models::document_to_json;
use crate::AppState;
use axum::{extract::State, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use service_core::error::AppError;

async fn fetch_faqs(state: &AppState) -> Result<Vec<serde_json::Value>, AppError> {
    let cursor = state.db.faqs().find(doc! {}, None).await.map_err(|e| {
        tracing::error!("Failed to query support FAQs: {}", e);
        AppError::from(e)
    })?;

    let faqs: Vec<Document> = cursor.try_collect().await.map_err(|e| {
        tracing::error!("Failed to read support FAQs cursor: {}", e);
        AppError::from(e)
    })?;
    Ok(faqs.into_iter().map(document_to_json).collect())
}

/// Get all faqs
///
/// Questions and answers are returned exactly as stored.
#[utoipa::path(
    get,
    path = "/api/pages",
    responses(
        (status = 200, description = "Successful response with the faq data"),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Support"
)]
pub async fn list_pages(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    Ok(Json(fetch_faqs(&state).await?))
}

/// Get all faqs (support alias)
#[utoipa::path(
    get,
    path = "/api/support",
    responses(
        (status = 200, description = "Successful response with the faq data"),
        (status = 500, description = "Internal Server Error", body = MessageResponse)
    ),
    tag = "Support"
)]
pub async fn list_support(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    Ok(Json(fetch_faqs(&state).await?))
}
