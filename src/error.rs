//! Armory error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmoryError {
    #[error("Invalid state parameter")]
    InvalidState,

    #[error("Token exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ArmoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ArmoryError::InvalidState => (StatusCode::BAD_REQUEST, "Invalid state parameter"),
            ArmoryError::ExchangeFailed(msg) => {
                tracing::error!("Token exchange failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed")
            }
            ArmoryError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ArmoryError::Upstream(msg) => {
                tracing::error!("Upstream request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch profile")
            }
            ArmoryError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = json!({ "success": false, "reason": message });
        (status, axum::Json(body)).into_response()
    }
}
