use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Service info
        .route("/", get(handlers::root::api_info))

        // Health check
        .route("/health", get(handlers::health::health_check))

        // Todo endpoints
        .route(
            "/api/v1/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route("/api/v1/todos/completed", get(handlers::todo::completed_todos))
        .route("/api/v1/todos/pending", get(handlers::todo::pending_todos))
        .route("/api/v1/todos/search", get(handlers::todo::search_todos))
        .route(
            "/api/v1/todos/:id",
            get(handlers::todo::get_todo)
                .put(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )

        // Add state
        .with_state(state)

        // Add tracing and CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
