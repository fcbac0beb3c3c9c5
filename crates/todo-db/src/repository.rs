use crate::{models::TodoRecord, Error, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use todo_core::{Todo, TodoDraft, TodoId, TodoStore};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Postgres-backed [`TodoStore`].
#[derive(Clone)]
pub struct PgTodoStore {
    pool: Pool<Postgres>,
}

impl PgTodoStore {
    /// Create new database connection
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        tracing::debug!("Connected to Postgres (max_connections={})", max_connections);

        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL DEFAULT '',
                description TEXT,
                completed BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| Error::Migration(e.to_string()))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_completed ON todos(completed)")
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;

        tracing::info!("Database schema initialized");

        Ok(())
    }

    async fn fetch_records(&self, sql: &str) -> Result<Vec<TodoRecord>> {
        let records = sqlx::query_as::<_, TodoRecord>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}

fn into_todos(records: Vec<TodoRecord>) -> Vec<Todo> {
    records.into_iter().map(Todo::from).collect()
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list_all(&self) -> todo_core::Result<Vec<Todo>> {
        let records = self.fetch_records("SELECT * FROM todos ORDER BY id").await?;
        Ok(into_todos(records))
    }

    async fn find_by_id(&self, id: TodoId) -> todo_core::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::from)?;

        Ok(record.map(Todo::from))
    }

    async fn find_by_completed(&self, completed: bool) -> todo_core::Result<Vec<Todo>> {
        let records = sqlx::query_as::<_, TodoRecord>(
            "SELECT * FROM todos WHERE completed = $1 ORDER BY id",
        )
        .bind(completed)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(into_todos(records))
    }

    async fn find_by_title_contains(&self, text: &str) -> todo_core::Result<Vec<Todo>> {
        // STRPOS keeps `%` and `_` literal, unlike LIKE
        let records = sqlx::query_as::<_, TodoRecord>(
            "SELECT * FROM todos WHERE STRPOS(LOWER(title), LOWER($1)) > 0 ORDER BY id",
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(into_todos(records))
    }

    async fn insert(&self, draft: TodoDraft) -> todo_core::Result<Todo> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            INSERT INTO todos (title, description, completed, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(record.into())
    }

    async fn update(&self, id: TodoId, patch: TodoDraft) -> todo_core::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            UPDATE todos SET
                title = $2,
                description = $3,
                completed = $4,
                updated_at = GREATEST(NOW(), created_at)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(record.map(Todo::from))
    }

    async fn delete_by_id(&self, id: TodoId) -> todo_core::Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: TodoId) -> todo_core::Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM todos WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::from)?;

        Ok(exists)
    }
}
