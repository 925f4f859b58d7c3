use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::FailureKind;
use crate::tuner::service::ERROR_PREFIX;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The completion call failed. `message` is the underlying error text.
    #[error("Completion failed ({kind:?}): {message}")]
    Completion { kind: FailureKind, message: String },

    #[error("Service unavailable: {0}")]
    Unconfigured(String),

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Completion { kind, message } => {
                // Already logged by the tuner service; the user sees the same text as the page.
                let body = Json(json!({
                    "error": {
                        "code": "COMPLETION_ERROR",
                        "kind": kind,
                        "message": format!("{ERROR_PREFIX}{message}")
                    }
                }));
                return (StatusCode::BAD_GATEWAY, body).into_response();
            }
            AppError::Unconfigured(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "MISSING_CREDENTIAL",
                msg.clone(),
            ),
            AppError::Render(e) => {
                tracing::error!("Template error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
