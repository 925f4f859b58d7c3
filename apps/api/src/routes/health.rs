use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(health_body("ok"))
}

/// GET /health while no API key is configured.
pub async fn unconfigured_health_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(health_body("unconfigured")),
    )
}

fn health_body(status: &str) -> Value {
    json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "service": "profile-tuner"
    })
}
