//! Data model shared by the API client, the store and the UI.

pub mod todo;

pub use todo::{CreateTodoPayload, EditTodoPayload, ReorderTodoPayload, Todo, TodoPatch};
