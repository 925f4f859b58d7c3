pub mod health;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{any, get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::{AppState, UnconfiguredState};
use crate::tuner::handlers;

/// Notice shown on every page while `OPENAI_API_KEY` is missing.
pub const MISSING_KEY_NOTICE: &str =
    "API Key not found. Please add OPENAI_API_KEY to the environment or .env file.";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_form))
        .route("/tune", post(handlers::handle_tune_form))
        .route("/api/v1/tune", post(handlers::handle_tune_json))
        .with_state(state)
}

/// Router used when startup found no API key: every path and method answers 503.
pub fn build_unconfigured_router(state: UnconfiguredState) -> Router {
    Router::new()
        .route("/health", any(health::unconfigured_health_handler))
        .fallback(unconfigured_fallback)
        .with_state(state)
}

async fn unconfigured_fallback(
    State(state): State<UnconfiguredState>,
    uri: Uri,
) -> Result<Response, AppError> {
    if uri.path().starts_with("/api/") {
        return Err(AppError::Unconfigured(state.notice));
    }
    let html = state.pages.unconfigured(&state.notice)?;
    Ok((StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response())
}
