//! Usage counts of hashtags across the task list.

use std::collections::BTreeMap;

use crate::entities::Todo;

/// Number of tasks carrying each tag.
///
/// Always equal to the multiset union of the tags of the tasks in the store.
/// Tags whose count drops to zero are removed, so two count maps describing
/// the same list compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagCounts(BTreeMap<String, usize>);

impl TagCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full recompute from a task list.
    pub fn from_todos<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        let mut counts = Self::new();
        for todo in todos {
            counts.increment(&todo.tags);
        }
        counts
    }

    pub fn increment(&mut self, tags: &[String]) {
        for tag in tags {
            *self.0.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    pub fn decrement(&mut self, tags: &[String]) {
        for tag in tags {
            if let Some(count) = self.0.get_mut(tag) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.0.remove(tag);
                }
            }
        }
    }

    /// Adjust counts for a task whose tags changed from `old` to `new`.
    pub fn replace(&mut self, old: &[String], new: &[String]) {
        let removed: Vec<String> = old.iter().filter(|t| !new.contains(t)).cloned().collect();
        let added: Vec<String> = new.iter().filter(|t| !old.contains(t)).cloned().collect();
        self.decrement(&removed);
        self.increment(&added);
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> usize {
        self.0.get(tag).copied().unwrap_or(0)
    }

    /// Tags in lexicographic order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
