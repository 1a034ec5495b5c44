//! REST client abstraction for the task backend.
//!
//! [`TodoApi`] is the seam the store and the UI talk to; [`HttpTodoApi`] is
//! the production implementation. Every call asks its [`TokenSource`] for a
//! fresh bearer token right before the request goes out.

use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::{CreateTodoPayload, EditTodoPayload, Todo};

pub mod factory;
pub mod http;
pub mod token;

pub use factory::create_api;
pub use http::HttpTodoApi;
pub use token::{EnvTokenSource, StaticTokenSource, TokenSource};

/// Errors surfaced by API calls. No call is ever retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Not authorized: the API rejected the token")]
    Unauthorized,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("No API token: {0}")]
    Token(String),
}

/// Operations the backend exposes for the signed-in user's list.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// `GET /todos`
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError>;

    /// `POST /todos`
    async fn create_todo(&self, payload: CreateTodoPayload) -> Result<Todo, ApiError>;

    /// `PUT /todos/:id`. The server may answer without a usable body, hence the `Option`.
    async fn update_todo(&self, todo_id: &str, payload: EditTodoPayload) -> Result<Option<Todo>, ApiError>;

    /// `DELETE /todos/:id`
    async fn delete_todo(&self, todo_id: &str) -> Result<(), ApiError>;

    /// `PUT /todos/reorder/:id`
    async fn reorder_todo(&self, todo_id: &str, new_position: usize) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct TodosEnvelope {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TodoEnvelope {
    pub todo: Todo,
}

/// `PUT /todos/:id` answers either with the bare task or with `{ todo }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UpdateResponse {
    Wrapped(TodoEnvelope),
    Bare(Todo),
}

impl UpdateResponse {
    pub fn into_todo(self) -> Todo {
        match self {
            Self::Wrapped(envelope) => envelope.todo,
            Self::Bare(todo) => todo,
        }
    }
}
