use chrono::{DateTime, Utc};
use sqlx::FromRow;
use todo_core::Todo;

#[derive(Debug, Clone, FromRow)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Todo {
            id: record.id,
            title: record.title,
            description: record.description,
            completed: record.completed,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
