use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service info for `GET /`
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Todo API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "A RESTful API for managing todos",
        "status": "UP",
        "health": "/health",
        "endpoints": {
            "todos": "/api/v1/todos",
            "health": "/health"
        }
    }))
}
