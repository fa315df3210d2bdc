use crate::state::AppState;
use crate::types::{AppError, AppResult};
use axum::{extract::State, response::Html};
use minijinja::context;

/// Render the chat page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = state
        .templates
        .render("chat.html", context! { title => "Finance Assistant" })
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Html(html))
}
