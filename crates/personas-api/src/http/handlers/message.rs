//! Chat message handlers for the REST API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use personas_types::message::{CreateMessageRequest, Message};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/message - Append a message to a persona's conversation.
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let Json(body) = payload?;
    let message = state.message_service.create_message(body).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages/{persona_id} - All messages for a persona, oldest first.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(persona_id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.message_service.get_messages(&persona_id).await?;
    Ok(Json(messages))
}
