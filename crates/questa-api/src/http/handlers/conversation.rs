//! Conversation lifecycle handlers for the REST API.
//!
//! The dialogue service replies through the outbox: each handler that feeds
//! an event drains the conversation's queued messages and returns them in
//! the response body, so one request carries the full reply batch.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use questa_types::dialogue::{ConversationId, DialogueStep};
use questa_types::event::ConversationEvent;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for POST /api/v1/conversations.
#[derive(Debug, Deserialize, Default)]
pub struct StartConversationRequest {
    /// Client-supplied conversation id; generated when omitted.
    pub conversation_id: Option<String>,
}

/// Request body for POST /api/v1/conversations/:id/events.
///
/// The conversation id comes from the path, so event bodies carry only the
/// variant payload.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    CategorySelected { category_id: String },
    AnswerChosen { prompt_id: Uuid, option_id: String },
    BackToMenu,
}

impl EventRequest {
    fn into_event(self, conversation_id: ConversationId) -> ConversationEvent {
        match self {
            EventRequest::CategorySelected { category_id } => {
                ConversationEvent::CategorySelected {
                    conversation_id,
                    category_id,
                }
            }
            EventRequest::AnswerChosen {
                prompt_id,
                option_id,
            } => ConversationEvent::AnswerChosen {
                conversation_id,
                prompt_id,
                option_id,
            },
            EventRequest::BackToMenu => ConversationEvent::BackToMenu { conversation_id },
        }
    }
}

/// POST /api/v1/conversations - Start (or restart) a conversation.
///
/// Feeds a session-start event and returns the greeting and menu batch.
pub async fn start_conversation(
    State(state): State<AppState>,
    body: Option<Json<StartConversationRequest>>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversation_id = body
        .map(|Json(b)| b)
        .unwrap_or_default()
        .conversation_id
        .unwrap_or_else(|| Uuid::now_v7().to_string());
    if conversation_id.is_empty() {
        return Err(AppError::Validation(
            "conversation_id must not be empty".to_string(),
        ));
    }
    let conversation_id = ConversationId(conversation_id);

    state
        .dialogue_service
        .handle_event(ConversationEvent::SessionStarted {
            conversation_id: conversation_id.clone(),
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(conversation = %conversation_id, "Conversation started via API");

    let messages = state.outbox.drain(&conversation_id);
    let step = step_of(&state, &conversation_id).await;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(
        serde_json::json!({
            "conversation_id": conversation_id,
            "step": step,
            "messages": messages,
        }),
        request_id,
        elapsed,
    )
    .with_link(
        "self",
        &format!("/api/v1/conversations/{conversation_id}"),
    )
    .with_link(
        "events",
        &format!("/api/v1/conversations/{conversation_id}/events"),
    );

    Ok(Json(resp))
}

/// POST /api/v1/conversations/:id/events - Feed one event into a conversation.
///
/// Returns the messages the dialogue service queued in response, webhook
/// style.
pub async fn post_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EventRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let conversation_id = ConversationId(id.clone());

    if state
        .dialogue_service
        .snapshot(&conversation_id)
        .await
        .is_none()
    {
        return Err(AppError::ConversationNotFound(id));
    }

    let outcome = state
        .dialogue_service
        .handle_event(body.into_event(conversation_id.clone()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::debug!(
        conversation = %conversation_id,
        outcome = ?outcome,
        "Conversation event handled"
    );

    let messages = state.outbox.drain(&conversation_id);
    let step = step_of(&state, &conversation_id).await;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(
        serde_json::json!({
            "conversation_id": conversation_id,
            "step": step,
            "messages": messages,
        }),
        request_id,
        elapsed,
    )
    .with_link(
        "self",
        &format!("/api/v1/conversations/{conversation_id}"),
    );

    Ok(Json(resp))
}

/// GET /api/v1/conversations/:id - Current dialogue state of a conversation.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let conversation_id = ConversationId(id.clone());

    let snapshot = state
        .dialogue_service
        .snapshot(&conversation_id)
        .await
        .ok_or(AppError::ConversationNotFound(id))?;
    let elapsed = start.elapsed().as_millis() as u64;

    let snapshot_json = serde_json::to_value(&snapshot)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let resp = ApiResponse::success(snapshot_json, request_id, elapsed)
        .with_link(
            "self",
            &format!("/api/v1/conversations/{conversation_id}"),
        )
        .with_link(
            "events",
            &format!("/api/v1/conversations/{conversation_id}/events"),
        );

    Ok(Json(resp))
}

/// DELETE /api/v1/conversations/:id - End a conversation and drop its session.
pub async fn end_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let conversation_id = ConversationId(id.clone());

    if !state.dialogue_service.end(&conversation_id) {
        return Err(AppError::ConversationNotFound(id));
    }
    // Drop anything still queued for the dead conversation.
    state.outbox.drain(&conversation_id);

    tracing::info!(conversation = %conversation_id, "Conversation ended via API");
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(
        serde_json::json!({"ended": true, "conversation_id": conversation_id}),
        request_id,
        elapsed,
    );

    Ok(Json(resp))
}

/// The conversation's current step, for reply envelopes.
async fn step_of(state: &AppState, conversation_id: &ConversationId) -> DialogueStep {
    state
        .dialogue_service
        .snapshot(conversation_id)
        .await
        .map(|snapshot| snapshot.step)
        .unwrap_or_default()
}
