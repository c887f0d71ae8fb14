use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use crate::client::fetch::CLIENT_MARKER_HEADER;

/// Build CORS middleware for the public edge:
/// - Origins come from CORS_ALLOWED_ORIGINS (comma-separated), with a
///   localhost fallback for development
/// - `Range` is allowed so the browser can issue seek requests, and
///   `Content-Range`/`Accept-Ranges` are exposed so players can read them
pub fn cors_middleware() -> Cors {
    // e.g. CORS_ALLOWED_ORIGINS=https://havefunwithaich.com,https://hq.havefunwithaich.com
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let allowed_origins: Vec<String> = allowed_raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    let effective_origins: Vec<String> = if allowed_origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        allowed_origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::RANGE,
            header::HeaderName::from_static(CLIENT_MARKER_HEADER),
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-trace-id"),
            header::CONTENT_RANGE,
            header::ACCEPT_RANGES,
        ])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
