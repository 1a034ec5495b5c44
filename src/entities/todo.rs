use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TEMP_ID_PREFIX;
use crate::tags::extract_tags;

/// A single task as exchanged with the backend.
///
/// `tags` always mirrors the hashtags found in `text`; callers change the
/// text and let [`Todo::set_text`] re-derive the tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub todo_id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Build a locally-created task with a temporary id, not yet known to the server.
    #[must_use]
    pub fn new_temporary(text: &str, order: usize) -> Self {
        let now = Utc::now();
        Self {
            todo_id: format!("{}{}", TEMP_ID_PREFIX, uuid::Uuid::new_v4()),
            text: text.to_string(),
            completed: false,
            tags: extract_tags(text),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this task only exists locally so far.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.todo_id.starts_with(TEMP_ID_PREFIX)
    }

    /// Replace the text and re-derive the tags from it.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.tags = extract_tags(text);
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Body of `POST /todos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoPayload {
    pub text: String,
    pub tags: Vec<String>,
}

/// Body of `PUT /todos/:id`. Absent fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTodoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body of `PUT /todos/reorder/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTodoPayload {
    pub new_position: usize,
}

/// A user-level change to a task. Tags are never part of a patch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }
}
