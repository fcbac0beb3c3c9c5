use crate::{Result, Todo, TodoDraft, TodoId, TodoStore};
use std::sync::Arc;

/// Use-case layer over a [`TodoStore`].
#[derive(Clone)]
pub struct TodoManager {
    store: Arc<dyn TodoStore>,
}

impl TodoManager {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// List all todos
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.store.list_all().await
    }

    /// Get todo by ID
    pub async fn get_todo(&self, id: TodoId) -> Result<Option<Todo>> {
        self.store.find_by_id(id).await
    }

    /// Create a todo. The id and timestamps are assigned by the store.
    pub async fn create_todo(&self, draft: TodoDraft) -> Result<Todo> {
        let todo = self.store.insert(draft).await?;

        tracing::info!("Created todo: {} ({})", todo.title, todo.id);

        Ok(todo)
    }

    /// Overwrite title, description and completion of an existing todo.
    ///
    /// Returns `None` when no todo has this id.
    pub async fn update_todo(&self, id: TodoId, patch: TodoDraft) -> Result<Option<Todo>> {
        let updated = self.store.update(id, patch).await?;

        match &updated {
            Some(todo) => tracing::info!("Updated todo: {} ({})", todo.title, todo.id),
            None => tracing::debug!("Update skipped, todo {} not found", id),
        }

        Ok(updated)
    }

    /// Delete todo. Returns `false` if it did not exist.
    pub async fn delete_todo(&self, id: TodoId) -> Result<bool> {
        let deleted = self.store.delete_by_id(id).await?;

        if deleted {
            tracing::info!("Deleted todo: {}", id);
        } else {
            tracing::debug!("Delete skipped, todo {} not found", id);
        }

        Ok(deleted)
    }

    pub async fn todo_exists(&self, id: TodoId) -> Result<bool> {
        self.store.exists_by_id(id).await
    }

    /// Get todos by completion status
    pub async fn get_todos_by_status(&self, completed: bool) -> Result<Vec<Todo>> {
        self.store.find_by_completed(completed).await
    }

    pub async fn get_completed_todos(&self) -> Result<Vec<Todo>> {
        self.get_todos_by_status(true).await
    }

    pub async fn get_pending_todos(&self) -> Result<Vec<Todo>> {
        self.get_todos_by_status(false).await
    }

    /// Search todos by title, case-insensitive
    pub async fn search_todos_by_title(&self, text: &str) -> Result<Vec<Todo>> {
        tracing::debug!("Searching todos by title: {:?}", text);
        self.store.find_by_title_contains(text).await
    }
}
