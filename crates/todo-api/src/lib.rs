pub mod config;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use todo_core::{InMemoryTodoStore, TodoManager, TodoStore};
use todo_db::PgTodoStore;

pub use crate::config::ApiConfig;
pub use routes::create_router;
pub use state::ApiState;

/// Wire the store selected by `config` into the shared state.
pub async fn build_state(config: &ApiConfig) -> anyhow::Result<ApiState> {
    let store: Arc<dyn TodoStore> = match config.database_url {
        Some(ref db_url) => {
            let database = PgTodoStore::with_max_connections(db_url, config.max_connections).await?;
            database.init_schema().await?;
            Arc::new(database)
        }
        None => {
            tracing::warn!("No database URL provided, running without persistence");
            Arc::new(InMemoryTodoStore::new())
        }
    };

    Ok(ApiState::new(TodoManager::new(store)))
}

/// Run the HTTP server until the listener fails.
pub async fn serve(config: &ApiConfig) -> anyhow::Result<()> {
    let state = build_state(config).await?;
    let app = create_router(state);

    let addr = config.addr();
    tracing::info!("Todo API server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
