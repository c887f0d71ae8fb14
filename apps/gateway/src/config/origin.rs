//! Internal content origin configuration.
//!
//! The origin is addressed by a fixed locator from the environment, never
//! derived from caller input, so the edge cannot be steered into proxying
//! arbitrary hosts.

use std::env;
use std::time::Duration;

use crate::AppError;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct OriginConfig {
    /// Base URL of the internal content origin.
    pub base_url: String,
    /// Trusted-caller credential attached to every origin request.
    /// Never exposed on any public-facing code path.
    pub issue_key: String,
    /// Connect timeout for origin calls. No retries at this layer.
    pub connect_timeout: Duration,
}

impl OriginConfig {
    pub fn new(base_url: impl Into<String>, issue_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            issue_key: issue_key.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Read the origin configuration from `ORIGIN_URL` and
    /// `ORIGIN_ISSUE_KEY`. Both are required.
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = env::var("ORIGIN_URL")
            .map_err(|_| AppError::config("ORIGIN_URL must be set".to_string()))?;
        let issue_key = env::var("ORIGIN_ISSUE_KEY")
            .map_err(|_| AppError::config("ORIGIN_ISSUE_KEY must be set".to_string()))?;

        if base_url.trim().is_empty() {
            return Err(AppError::config("ORIGIN_URL must not be empty".to_string()));
        }
        if issue_key.trim().is_empty() {
            return Err(AppError::config("ORIGIN_ISSUE_KEY must not be empty".to_string()));
        }

        Ok(Self::new(base_url, issue_key))
    }
}

// The issue key is a credential; keep it out of debug output.
impl std::fmt::Debug for OriginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OriginConfig")
            .field("base_url", &self.base_url)
            .field("issue_key", &"[redacted]")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
