use crate::services::origin::OriginClient;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Everything here is read-only after startup; handlers share it without
/// any cross-request mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Token-signing configuration.
    pub security: SecurityConfig,
    /// Client for the internal content origin.
    pub origin: OriginClient,
}

impl AppState {
    pub fn new(security: SecurityConfig, origin: OriginClient) -> Self {
        Self { security, origin }
    }
}
