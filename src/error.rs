use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::gate::InvalidSecret;

/// Path the client should go to when a protected request is refused.
pub const GATE_PATH: &str = "/login";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidSecret(#[from] InvalidSecret),

    #[error("Session is locked")]
    Locked,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The detail is logged, never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidSecret(_) | ApiError::Locked => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            ApiError::Locked => serde_json::json!({
                "error": self.to_string(),
                "redirect": GATE_PATH,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
