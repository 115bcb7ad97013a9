use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Service string reported by the health endpoints; part of the public
/// contract consumed by the deployment platform's checks.
pub const SERVICE_NAME: &str = "PDF Text Extractor API";

/// Health check endpoint
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Root endpoint; some platforms probe `/` instead of `/health`.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "message": "API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
