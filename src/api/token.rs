use async_trait::async_trait;

use super::ApiError;

/// Supplies the bearer token for the next request.
///
/// Implementations are consulted before every call and must not assume the
/// previous token is still valid.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<String, ApiError>;
}

/// Reads the token from an environment variable on every call.
#[derive(Clone, Debug)]
pub struct EnvTokenSource {
    var: String,
}

impl EnvTokenSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

#[async_trait]
impl TokenSource for EnvTokenSource {
    async fn token(&self) -> Result<String, ApiError> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ApiError::Token(format!("{} is not set", self.var))),
        }
    }
}

/// Fixed token, mostly for tests and scripted use.
#[derive(Clone, Debug)]
pub struct StaticTokenSource(String);

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<String, ApiError> {
        Ok(self.0.clone())
    }
}
