use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::assistant::handle_assistant_request,
    state::SharedState,
};

pub async fn assistant_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = handle_assistant_request(&state.assistant, &payload.message).await?;
    Ok(Json(response))
}
