use crate::{Result, Todo, TodoDraft, TodoId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Persistence contract for todos.
///
/// Absence is reported through `Option`/`bool`, never through `Err`.
/// `update` and `delete_by_id` are single conditional operations, so a
/// caller never observes a row disappearing between a check and a write.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos in ascending id order
    async fn list_all(&self) -> Result<Vec<Todo>>;

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>>;

    /// Todos whose `completed` flag equals `completed`
    async fn find_by_completed(&self, completed: bool) -> Result<Vec<Todo>>;

    /// Todos whose title contains `text`, ignoring case. Empty `text` matches everything.
    async fn find_by_title_contains(&self, text: &str) -> Result<Vec<Todo>>;

    /// Persist a new todo; the store assigns the id and both timestamps.
    async fn insert(&self, draft: TodoDraft) -> Result<Todo>;

    /// Overwrite an existing todo, or `None` if no todo has this id.
    async fn update(&self, id: TodoId, patch: TodoDraft) -> Result<Option<Todo>>;

    /// Returns whether a todo was removed.
    async fn delete_by_id(&self, id: TodoId) -> Result<bool>;

    async fn exists_by_id(&self, id: TodoId) -> Result<bool>;
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    last_id: TodoId,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryTodoStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Todo>
    where
        F: Fn(&Todo) -> bool + Send,
    {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|&todo| predicate(todo))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_completed(&self, completed: bool) -> Result<Vec<Todo>> {
        Ok(self.filter(|todo| todo.completed == completed).await)
    }

    async fn find_by_title_contains(&self, text: &str) -> Result<Vec<Todo>> {
        Ok(self.filter(|todo| todo.title_contains(text)).await)
    }

    async fn insert(&self, draft: TodoDraft) -> Result<Todo> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let todo = Todo::from_draft(table.last_id, draft, Utc::now());
        table.rows.insert(todo.id, todo.clone());

        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoDraft) -> Result<Option<Todo>> {
        let mut table = self.table.write().await;

        Ok(table.rows.get_mut(&id).map(|todo| {
            todo.apply(patch, Utc::now());
            todo.clone()
        }))
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn exists_by_id(&self, id: TodoId) -> Result<bool> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }
}
