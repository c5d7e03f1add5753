// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorBody;
use crate::services::completion::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream(UpstreamError::MissingApiKey) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Missing OPENAI_API_KEY on server")
            }
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "Upstream completion service error"),
        };

        // Details stay in the log; the caller only gets the summary.
        error!(error = %self, status = status.as_u16(), "assistant request failed");

        (status, Json(ErrorBody { error: message.to_string() })).into_response()
    }
}
