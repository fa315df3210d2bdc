//! API endpoint handlers

use crate::state::AppState;
use crate::types::{AppError, AppResult, ChatAnswer, ChatRequest};
use axum::{extract::State, response::Json};

/// Handle a chat question: validate, forward to the completion service,
/// return the answer. Empty questions never reach the upstream.
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatAnswer>> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Missing question".to_string()));
    }

    tracing::info!(chars = question.len(), "forwarding question to completion service");

    let answer = state.completions.ask(question).await?;

    tracing::debug!(chars = answer.len(), "returning answer");

    Ok(Json(ChatAnswer { answer }))
}
