//! Category catalog handlers for the REST API.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;

use questa_core::bank::QuestionBank;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/categories - List the configured quiz categories.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<serde_json::Value>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let summaries = state.dialogue_service.categories().await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let categories_json: Vec<serde_json::Value> = summaries
        .iter()
        .map(|summary| {
            serde_json::json!({
                "id": summary.id,
                "label": summary.label,
            })
        })
        .collect();

    let resp = ApiResponse::success(categories_json, request_id, elapsed)
        .with_link("self", "/api/v1/categories");

    Ok(Json(resp))
}

/// GET /api/v1/categories/:id - Outline of one category's bank.
///
/// Returns the scale structure and question counts, not the question texts;
/// those are delivered one at a time through a conversation.
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let category = state.bank.load(&id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let label = state
        .config
        .catalog_entry(&id)
        .map(|entry| entry.label.clone())
        .unwrap_or_else(|| id.clone());
    let scales: Vec<serde_json::Value> = category
        .scales
        .iter()
        .map(|scale| {
            serde_json::json!({
                "title": scale.title,
                "questions": scale.questions.len(),
            })
        })
        .collect();

    let resp = ApiResponse::success(
        serde_json::json!({
            "id": category.name,
            "label": label,
            "scales": scales,
            "total_questions": category.total_questions(),
        }),
        request_id,
        elapsed,
    )
    .with_link("self", &format!("/api/v1/categories/{id}"))
    .with_link("categories", "/api/v1/categories");

    Ok(Json(resp))
}
