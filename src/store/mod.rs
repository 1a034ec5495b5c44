//! In-memory task list with optimistic mutations.
//!
//! Every mutation is split in two steps:
//!
//! 1. an *apply* method that changes local state immediately and returns a
//!    pending ticket (or `None` when there is nothing to do),
//! 2. a *settle* method that consumes the ticket together with the result of
//!    the matching API call, and either merges the server answer or reverts
//!    the local change.
//!
//! The ticket's `send` method performs the API call, so the caller decides
//! where the network step runs. The UI spawns it on a background task.

use std::collections::HashSet;

use crate::api::{ApiError, TodoApi};
use crate::constants::{
    ERROR_ADD_FAILED, ERROR_DELETE_FAILED, ERROR_EDIT_FAILED, ERROR_LOAD_FAILED, ERROR_REORDER_FAILED,
};
use crate::entities::{CreateTodoPayload, EditTodoPayload, Todo, TodoPatch};
use crate::tags::extract_tags;

pub mod edit;
pub mod filter;
pub mod tag_counts;
pub mod views;

pub use edit::EditSession;
pub use filter::{FilterMode, NoTagsFilter, TagFilter};
pub use tag_counts::TagCounts;
pub use views::{CompletionWatcher, TagGroup};

/// A failed store operation. Local state has already been reverted when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to load to-dos: {0}")]
    Load(ApiError),
    #[error("Failed to add to-do: {0}")]
    Add(ApiError),
    #[error("Failed to edit to-do: {0}")]
    Edit(ApiError),
    #[error("Failed to delete to-do: {0}")]
    Delete(ApiError),
    #[error("Failed to reorder to-dos: {0}")]
    Reorder(ApiError),
}

impl StoreError {
    /// Short message for notifications.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Load(_) => ERROR_LOAD_FAILED,
            Self::Add(_) => ERROR_ADD_FAILED,
            Self::Edit(_) => ERROR_EDIT_FAILED,
            Self::Delete(_) => ERROR_DELETE_FAILED,
            Self::Reorder(_) => ERROR_REORDER_FAILED,
        }
    }

    #[must_use]
    pub fn api_error(&self) -> &ApiError {
        match self {
            Self::Load(e) | Self::Add(e) | Self::Edit(e) | Self::Delete(e) | Self::Reorder(e) => e,
        }
    }
}

/// An add waiting for the server. The temporary task is already in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAdd {
    temp_id: String,
    payload: CreateTodoPayload,
}

impl PendingAdd {
    #[must_use]
    pub fn temp_id(&self) -> &str {
        &self.temp_id
    }

    pub async fn send(&self, api: &dyn TodoApi) -> Result<Todo, ApiError> {
        api.create_todo(self.payload.clone()).await
    }
}

/// An edit waiting for the server, holding the task as it was before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingEdit {
    snapshot: Todo,
    payload: EditTodoPayload,
}

impl PendingEdit {
    #[must_use]
    pub fn todo_id(&self) -> &str {
        &self.snapshot.todo_id
    }

    #[must_use]
    pub fn payload(&self) -> &EditTodoPayload {
        &self.payload
    }

    pub async fn send(&self, api: &dyn TodoApi) -> Result<Option<Todo>, ApiError> {
        api.update_todo(&self.snapshot.todo_id, self.payload.clone()).await
    }
}

/// A delete waiting for the server. The task is kept here until settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    removed: Todo,
    index: usize,
}

impl PendingDelete {
    #[must_use]
    pub fn todo_id(&self) -> &str {
        &self.removed.todo_id
    }

    pub async fn send(&self, api: &dyn TodoApi) -> Result<(), ApiError> {
        api.delete_todo(&self.removed.todo_id).await
    }
}

/// A reorder waiting for the server, holding the list as it was before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReorder {
    todo_id: String,
    new_position: usize,
    snapshot: Vec<Todo>,
}

impl PendingReorder {
    #[must_use]
    pub fn todo_id(&self) -> &str {
        &self.todo_id
    }

    #[must_use]
    pub fn new_position(&self) -> usize {
        self.new_position
    }

    pub async fn send(&self, api: &dyn TodoApi) -> Result<(), ApiError> {
        api.reorder_todo(&self.todo_id, self.new_position).await
    }
}

/// Authoritative client-side state of the task list.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    tag_counts: TagCounts,
    filter: FilterMode,
    edit: Option<EditSession>,
    deleting: HashSet<String>,
    last_added: Option<String>,
    loaded: bool,
}

impl TodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in display order (`order` ascending).
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[must_use]
    pub fn tag_counts(&self) -> &TagCounts {
        &self.tag_counts
    }

    #[must_use]
    pub fn filter_mode(&self) -> &FilterMode {
        &self.filter
    }

    #[must_use]
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_deleting(&self, todo_id: &str) -> bool {
        self.deleting.contains(todo_id)
    }

    #[must_use]
    pub fn todo(&self, todo_id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.todo_id == todo_id)
    }

    #[must_use]
    pub fn position_of(&self, todo_id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.todo_id == todo_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Server id of the most recent successful add that is still in the list.
    #[must_use]
    pub fn last_added(&self) -> Option<&str> {
        self.last_added.as_deref().filter(|id| self.todo(id).is_some())
    }

    /// Tags offered for filtering: every counted tag plus any tag that still
    /// carries a filter, so an active filter can always be toggled off.
    #[must_use]
    pub fn known_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tag_counts.tags().map(str::to_string).collect();
        for tag in self.filter.filtered_tags() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags.sort();
        tags
    }

    #[must_use]
    pub fn tag_filter_state(&self, tag: &str) -> Option<TagFilter> {
        self.filter.tag_state(tag)
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        views::visible(&self.todos, &self.filter)
    }

    #[must_use]
    pub fn grouped(&self) -> Vec<TagGroup<'_>> {
        views::grouped(&self.todos, &self.filter)
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        views::progress(&self.todos)
    }

    #[must_use]
    pub fn all_complete(&self) -> bool {
        views::all_complete(&self.todos)
    }

    // Load

    /// Replace the list with the fetched one. On failure the list is left empty.
    pub fn settle_load(&mut self, result: Result<Vec<Todo>, ApiError>) -> Result<(), StoreError> {
        self.loaded = true;
        self.deleting.clear();
        self.last_added = None;
        match result {
            Ok(mut todos) => {
                todos.sort_by_key(|todo| todo.order);
                for todo in &mut todos {
                    todo.tags = extract_tags(&todo.text);
                }
                self.todos = todos;
                self.renumber();
                self.tag_counts = TagCounts::from_todos(&self.todos);
                log::info!("Loaded {} to-dos with {} tags", self.todos.len(), self.tag_counts.len());
                Ok(())
            }
            Err(e) => {
                self.todos.clear();
                self.tag_counts.clear();
                log::error!("{}: {}", ERROR_LOAD_FAILED, e);
                Err(StoreError::Load(e))
            }
        }
    }

    // Add

    /// Append a temporary task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<PendingAdd> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let todo = Todo::new_temporary(text, self.todos.len());
        self.tag_counts.increment(&todo.tags);
        let pending = PendingAdd {
            temp_id: todo.todo_id.clone(),
            payload: CreateTodoPayload {
                text: todo.text.clone(),
                tags: todo.tags.clone(),
            },
        };
        self.todos.push(todo);
        Some(pending)
    }

    /// Swap the temporary task for the server's, or drop it on failure.
    pub fn settle_add(&mut self, pending: PendingAdd, result: Result<Todo, ApiError>) -> Result<(), StoreError> {
        let index = self.position_of(&pending.temp_id);
        match (result, index) {
            (Ok(mut server), Some(index)) => {
                let local = &mut self.todos[index];
                server.tags = extract_tags(&server.text);
                server.order = local.order;
                self.tag_counts.replace(&local.tags, &server.tags);
                self.last_added = Some(server.todo_id.clone());
                *local = server;
                Ok(())
            }
            (Ok(server), None) => {
                log::warn!("Added to-do {} no longer in the list, ignoring server copy", server.todo_id);
                Ok(())
            }
            (Err(e), Some(index)) => {
                let removed = self.todos.remove(index);
                self.tag_counts.decrement(&removed.tags);
                self.renumber();
                log::error!("{}: {}", ERROR_ADD_FAILED, e);
                Err(StoreError::Add(e))
            }
            (Err(e), None) => {
                log::error!("{}: {}", ERROR_ADD_FAILED, e);
                Err(StoreError::Add(e))
            }
        }
    }

    // Edit

    /// Apply a patch locally. A text change re-derives the task's tags and
    /// adjusts the counts by the difference.
    pub fn edit(&mut self, todo_id: &str, patch: TodoPatch) -> Option<PendingEdit> {
        let index = self.position_of(todo_id)?;
        let todo = &mut self.todos[index];
        let snapshot = todo.clone();
        let mut payload = EditTodoPayload::default();

        if let Some(text) = patch.text {
            todo.set_text(&text);
            self.tag_counts.replace(&snapshot.tags, &todo.tags);
            payload.tags = Some(todo.tags.clone());
            payload.text = Some(text);
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
            payload.completed = Some(completed);
        }

        Some(PendingEdit { snapshot, payload })
    }

    pub fn toggle_completion(&mut self, todo_id: &str) -> Option<PendingEdit> {
        let completed = self.todo(todo_id)?.completed;
        self.edit(todo_id, TodoPatch::completed(!completed))
    }

    /// Merge the server's copy, or put the pre-edit task back on failure.
    ///
    /// The task keeps its current position either way.
    pub fn settle_edit(&mut self, pending: PendingEdit, result: Result<Option<Todo>, ApiError>) -> Result<(), StoreError> {
        let index = self.position_of(pending.todo_id());
        match (result, index) {
            (Ok(Some(server)), Some(index)) => {
                let local = &mut self.todos[index];
                let old_tags = std::mem::take(&mut local.tags);
                local.set_text(&server.text);
                local.completed = server.completed;
                local.created_at = server.created_at;
                local.updated_at = server.updated_at;
                self.tag_counts.replace(&old_tags, &local.tags);
                Ok(())
            }
            (Ok(_), _) => Ok(()),
            (Err(e), Some(index)) => {
                let local = &mut self.todos[index];
                let mut restored = pending.snapshot;
                restored.order = local.order;
                self.tag_counts.replace(&local.tags, &restored.tags);
                *local = restored;
                log::error!("{}: {}", ERROR_EDIT_FAILED, e);
                Err(StoreError::Edit(e))
            }
            (Err(e), None) => {
                log::error!("{}: {}", ERROR_EDIT_FAILED, e);
                Err(StoreError::Edit(e))
            }
        }
    }

    // Delete

    /// Remove a task locally. Skipped while a delete of the same id is in flight.
    pub fn delete(&mut self, todo_id: &str) -> Option<PendingDelete> {
        if self.deleting.contains(todo_id) {
            log::info!("Delete of {} already in flight, skipping", todo_id);
            return None;
        }
        let index = self.position_of(todo_id)?;

        self.deleting.insert(todo_id.to_string());
        let removed = self.todos.remove(index);
        self.tag_counts.decrement(&removed.tags);
        self.renumber();
        if self.edit.as_ref().is_some_and(|e| e.todo_id() == todo_id) {
            self.edit = None;
        }

        Some(PendingDelete { removed, index })
    }

    /// Forget the task for good, or put it back where it was on failure.
    ///
    /// Only the removed task is reinserted, at its old index, so changes made
    /// to other tasks while the delete was in flight survive a failure.
    pub fn settle_delete(&mut self, pending: PendingDelete, result: Result<(), ApiError>) -> Result<(), StoreError> {
        self.deleting.remove(&pending.removed.todo_id);
        match result {
            Ok(()) => {
                if self.last_added.as_deref() == Some(pending.removed.todo_id.as_str()) {
                    self.last_added = None;
                }
                Ok(())
            }
            Err(e) => {
                let index = pending.index.min(self.todos.len());
                self.tag_counts.increment(&pending.removed.tags);
                self.todos.insert(index, pending.removed);
                self.renumber();
                log::error!("{}: {}", ERROR_DELETE_FAILED, e);
                Err(StoreError::Delete(e))
            }
        }
    }

    // Reorder

    /// Move a task to `new_position` (clamped to the list), renumbering every task.
    ///
    /// Returns `None` if the task is unknown or already at that position.
    pub fn reorder(&mut self, todo_id: &str, new_position: usize) -> Option<PendingReorder> {
        let from = self.position_of(todo_id)?;
        let to = new_position.min(self.todos.len().saturating_sub(1));
        if from == to {
            return None;
        }

        let snapshot = self.todos.clone();
        let todo = self.todos.remove(from);
        self.todos.insert(to, todo);
        self.renumber();

        Some(PendingReorder {
            todo_id: todo_id.to_string(),
            new_position: to,
            snapshot,
        })
    }

    pub fn move_to_top(&mut self, todo_id: &str) -> Option<PendingReorder> {
        self.reorder(todo_id, 0)
    }

    /// Keep the new order, or restore the whole previous list on failure.
    pub fn settle_reorder(&mut self, pending: PendingReorder, result: Result<(), ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                // Tags of the restored list may differ from the current one if
                // an edit landed in between; keep the counts in step.
                let current = TagCounts::from_todos(&self.todos);
                let restored = TagCounts::from_todos(&pending.snapshot);
                if current != restored {
                    self.tag_counts = restored;
                }
                self.todos = pending.snapshot;
                log::error!("{}: {}", ERROR_REORDER_FAILED, e);
                Err(StoreError::Reorder(e))
            }
        }
    }

    // Edit session

    pub fn start_edit(&mut self, todo_id: &str, current_text: &str) {
        self.edit = Some(EditSession::new(todo_id, current_text));
    }

    pub fn change_edit_text(&mut self, text: &str) {
        if let Some(session) = self.edit.as_mut() {
            session.set_text(text);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Persist the working text of the session on `todo_id`.
    ///
    /// Blank working text leaves the session open and does nothing.
    pub fn commit_edit(&mut self, todo_id: &str) -> Option<PendingEdit> {
        let session = self.edit.as_ref().filter(|s| s.todo_id() == todo_id)?;
        let text = session.committable_text()?.to_string();
        self.edit = None;
        self.edit(todo_id, TodoPatch::text(text))
    }

    // Filters

    pub fn toggle_tag_filter(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    pub fn toggle_no_tags_filter(&mut self) {
        self.filter.toggle_no_tags();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    fn renumber(&mut self) {
        for (index, todo) in self.todos.iter_mut().enumerate() {
            todo.order = index;
        }
    }
}
