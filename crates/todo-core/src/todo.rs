use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TodoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or overwriting a todo.
///
/// Store-owned fields (`id`, `createdAt`, `updatedAt`) are not part of the
/// draft and are skipped when present in an incoming payload. Every field
/// falls back to its default when absent, so an update with a sparse draft
/// clears the omitted fields rather than leaving them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl Todo {
    /// Materialize a draft as a freshly stored todo. Both timestamps share `now`.
    pub fn from_draft(id: TodoId, draft: TodoDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields from `patch` and refresh `updated_at`.
    ///
    /// `updated_at` never moves behind `created_at`, even if the clock does.
    pub fn apply(&mut self, patch: TodoDraft, now: DateTime<Utc>) {
        self.title = patch.title;
        self.description = patch.description;
        self.completed = patch.completed;
        self.updated_at = now.max(self.created_at);
    }

    /// Case-insensitive, unanchored substring match on the title.
    pub fn title_contains(&self, text: &str) -> bool {
        self.title.to_lowercase().contains(&text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_draft_defaults() {
        let draft: TodoDraft = serde_json::from_str(r#"{"title":"Learn X"}"#).unwrap();

        assert_eq!(draft.title, "Learn X");
        assert_eq!(draft.description, None);
        assert!(!draft.completed);
    }

    #[test]
    fn test_draft_ignores_store_fields() {
        let draft: TodoDraft = serde_json::from_str(
            r#"{"id":42,"title":"Learn X","createdAt":"2024-01-01T00:00:00Z","completed":true}"#,
        )
        .unwrap();

        assert_eq!(draft, TodoDraft::new("Learn X").with_completed(true));
    }

    #[test]
    fn test_todo_serializes_camel_case() {
        let now = Utc::now();
        let todo = Todo::from_draft(1, TodoDraft::new("Test").with_description("Desc"), now);
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "Desc");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_from_draft_sets_equal_timestamps() {
        let todo = Todo::from_draft(7, TodoDraft::new("Test"), Utc::now());
        assert_eq!(todo.id, 7);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_apply_overwrites_all_fields() {
        let created = Utc::now();
        let mut todo = Todo::from_draft(
            1,
            TodoDraft::new("Old").with_description("Old description"),
            created,
        );

        todo.apply(TodoDraft::new("New").with_completed(true), created + Duration::seconds(5));

        assert_eq!(todo.title, "New");
        assert_eq!(todo.description, None);
        assert!(todo.completed);
        assert_eq!(todo.created_at, created);
        assert_eq!(todo.updated_at, created + Duration::seconds(5));
    }

    #[test]
    fn test_apply_never_rewinds_before_creation() {
        let created = Utc::now();
        let mut todo = Todo::from_draft(1, TodoDraft::new("Test"), created);

        todo.apply(TodoDraft::new("Test"), created - Duration::seconds(30));

        assert_eq!(todo.updated_at, created);
    }

    #[test]
    fn test_title_contains() {
        let todo = Todo::from_draft(1, TodoDraft::new("Learn Spring Boot"), Utc::now());

        assert!(todo.title_contains("spring"));
        assert!(todo.title_contains("BOOT"));
        assert!(todo.title_contains("n Sp"));
        assert!(todo.title_contains(""));
        assert!(!todo.title_contains("kubernetes"));
    }
}
