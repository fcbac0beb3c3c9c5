pub mod todo;
pub mod store;
pub mod manager;
pub mod error;

// Re-exports
pub use todo::{Todo, TodoDraft, TodoId};
pub use store::{InMemoryTodoStore, TodoStore};
pub use manager::TodoManager;
pub use error::{Error, Result};
