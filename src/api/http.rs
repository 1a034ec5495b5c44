//! reqwest-backed implementation of [`TodoApi`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use super::{ApiError, TodoApi, TodoEnvelope, TodosEnvelope, TokenSource, UpdateResponse};
use crate::entities::{CreateTodoPayload, EditTodoPayload, ReorderTodoPayload, Todo};

const USER_AGENT: &str = concat!("typetodo/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the task backend.
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl HttpTodoApi {
    /// Create a client for `base_url` (e.g. `http://localhost:5001/api`).
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Start a request with a freshly fetched bearer token.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.token().await?;
        Ok(self.client.request(method, self.url(path)).bearer_auth(token))
    }

    async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = Self::execute(self.request(Method::GET, "todos").await?).await?;
        let envelope: TodosEnvelope = Self::decode(response).await?;
        log::info!("Fetched {} to-dos", envelope.todos.len());
        Ok(envelope.todos)
    }

    async fn create_todo(&self, payload: CreateTodoPayload) -> Result<Todo, ApiError> {
        let builder = self.request(Method::POST, "todos").await?.json(&payload);
        let envelope: TodoEnvelope = Self::decode(Self::execute(builder).await?).await?;
        Ok(envelope.todo)
    }

    async fn update_todo(&self, todo_id: &str, payload: EditTodoPayload) -> Result<Option<Todo>, ApiError> {
        let builder = self.request(Method::PUT, &format!("todos/{todo_id}")).await?.json(&payload);
        let response = Self::execute(builder).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(serde_json::from_slice::<UpdateResponse>(&bytes).ok().map(UpdateResponse::into_todo))
    }

    async fn delete_todo(&self, todo_id: &str) -> Result<(), ApiError> {
        Self::execute(self.request(Method::DELETE, &format!("todos/{todo_id}")).await?).await?;
        Ok(())
    }

    async fn reorder_todo(&self, todo_id: &str, new_position: usize) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("todos/reorder/{todo_id}"))
            .await?
            .json(&ReorderTodoPayload { new_position });
        Self::execute(builder).await?;
        Ok(())
    }
}
