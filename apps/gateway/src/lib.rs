#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::token::{issue_token, verify_token, AccessClaims, TOKEN_TTL_MS};
pub use client::fetch::{FetchClient, FetchedResource, MediaHandle, ResourceDescriptor};
pub use client::gate::{is_authorized, ClientIdentity};
pub use config::origin::OriginConfig;
pub use error::AppError;
pub use extractors::access_token::AccessToken;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::security_headers::SecurityHeaders;
pub use middleware::structured_logger::StructuredLogger;
pub use services::origin::{ContentKind, OriginClient, ISSUE_KEY_HEADER};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
