pub mod models;
pub mod repository;
pub mod error;

// Re-exports
pub use models::TodoRecord;
pub use repository::PgTodoStore;
pub use error::{Error, Result};
