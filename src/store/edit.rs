/// The single in-progress text edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    todo_id: String,
    text: String,
}

impl EditSession {
    pub fn new(todo_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            todo_id: todo_id.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn todo_id(&self) -> &str {
        &self.todo_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Working text trimmed, or `None` if nothing would remain.
    #[must_use]
    pub fn committable_text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
