//! Pure projections of the task list used for rendering.

use std::collections::BTreeMap;

use super::filter::FilterMode;
use crate::entities::Todo;

/// Tasks passing `filter`, incomplete before completed, otherwise in list order.
#[must_use]
pub fn visible<'a>(todos: &'a [Todo], filter: &FilterMode) -> Vec<&'a Todo> {
    let mut visible: Vec<&Todo> = todos.iter().filter(|todo| filter.matches(todo)).collect();
    // sort_by_key is stable
    visible.sort_by_key(|todo| todo.completed);
    visible
}

/// One section of the grouped-by-tag view. `tag` is `None` for untagged tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagGroup<'a> {
    pub tag: Option<String>,
    pub todos: Vec<&'a Todo>,
}

/// Group the visible tasks by tag.
///
/// A task with several tags shows up in each of their groups. Groups are
/// ordered by tag name with the untagged group last, and only present when
/// non-empty.
#[must_use]
pub fn grouped<'a>(todos: &'a [Todo], filter: &FilterMode) -> Vec<TagGroup<'a>> {
    let mut by_tag: BTreeMap<&str, Vec<&Todo>> = BTreeMap::new();
    let mut untagged = Vec::new();

    for todo in visible(todos, filter) {
        if todo.tags.is_empty() {
            untagged.push(todo);
        }
        for tag in &todo.tags {
            by_tag.entry(tag.as_str()).or_default().push(todo);
        }
    }

    let mut groups: Vec<TagGroup> = by_tag
        .into_iter()
        .map(|(tag, todos)| TagGroup {
            tag: Some(tag.to_string()),
            todos,
        })
        .collect();

    if !untagged.is_empty() {
        groups.push(TagGroup { tag: None, todos: untagged });
    }
    groups
}

/// Share of completed tasks in percent, 0 for an empty list.
#[must_use]
pub fn progress(todos: &[Todo]) -> f64 {
    if todos.is_empty() {
        return 0.0;
    }
    let completed = todos.iter().filter(|todo| todo.completed).count();
    completed as f64 / todos.len() as f64 * 100.0
}

/// Non-empty and every task completed.
#[must_use]
pub fn all_complete(todos: &[Todo]) -> bool {
    !todos.is_empty() && todos.iter().all(|todo| todo.completed)
}

/// Fires once each time the list enters the all-complete state.
#[derive(Clone, Debug, Default)]
pub struct CompletionWatcher {
    was_complete: bool,
}

impl CompletionWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state without firing, e.g. right after a load.
    pub fn prime(&mut self, todos: &[Todo]) {
        self.was_complete = all_complete(todos);
    }

    /// Returns true only on a transition from not-complete to complete.
    pub fn observe(&mut self, todos: &[Todo]) -> bool {
        let complete = all_complete(todos);
        let fired = complete && !self.was_complete;
        self.was_complete = complete;
        fired
    }
}
