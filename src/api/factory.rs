//! Builds the API client from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use super::{EnvTokenSource, HttpTodoApi, TodoApi, TokenSource};
use crate::config::ApiConfig;

/// Create the production API client and the token source it reads from.
///
/// # Errors
/// Returns error if the HTTP client cannot be constructed.
pub fn create_api(config: &ApiConfig) -> Result<(Arc<dyn TodoApi>, Arc<dyn TokenSource>)> {
    let tokens: Arc<dyn TokenSource> = Arc::new(EnvTokenSource::new(config.token_env.clone()));
    let api = HttpTodoApi::new(
        config.base_url.clone(),
        tokens.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .context("Failed to build HTTP client")?;
    Ok((Arc::new(api), tokens))
}
