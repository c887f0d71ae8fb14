//! Shared test fixtures: a live mock content origin and gateway state
//! wired against it.
//!
//! The mock origin is a real HTTP server on a random loopback port, so
//! proxy tests exercise the full hop including the outbound client. It
//! rejects any request without the expected issue key, which makes every
//! green proxy test double as proof that the credential was injected.

use std::collections::HashMap;

use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use gateway::{AppState, OriginClient, OriginConfig, SecurityConfig};

pub const TEST_ISSUE_KEY: &str = "test-issue-key-1";
pub const TEST_SECRET: &[u8] = b"test_gate_secret_not_for_production";

pub const WEBP_BODY: &[u8] = b"RIFF0000WEBPVP8 fake-image-bytes";
pub const GIF_BODY: &[u8] = b"GIF89a fake-ad-bytes";
pub const VIDEO_FULL_BODY: &[u8] = b"fake-video-bytes-full";
pub const VIDEO_PARTIAL_BODY: &[u8] = b"fake-video-bytes-partial";

pub struct MockOrigin {
    pub base_url: String,
}

async fn origin_handler(req: HttpRequest) -> HttpResponse {
    let seen_key = req
        .headers()
        .get("x-hfw-issue-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if seen_key != TEST_ISSUE_KEY {
        return HttpResponse::Unauthorized().body("issue key missing or wrong");
    }

    let params: HashMap<String, String> =
        web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();

    if params.get("content_id").map(String::as_str) == Some("missing") {
        return HttpResponse::NotFound().body("content not found");
    }

    match params.get("type").map(String::as_str) {
        Some("image") => HttpResponse::Ok()
            .content_type("image/webp")
            .insert_header(("x-origin-seen-key", seen_key))
            .body(WEBP_BODY),
        Some("video") => match req.headers().get(header::RANGE).and_then(|v| v.to_str().ok()) {
            Some(range) => HttpResponse::PartialContent()
                .content_type("video/mp4")
                .insert_header((header::CONTENT_RANGE, "bytes 100-199/1000"))
                .insert_header(("x-origin-range", range.to_string()))
                .body(VIDEO_PARTIAL_BODY),
            None => HttpResponse::Ok()
                .content_type("video/mp4")
                .body(VIDEO_FULL_BODY),
        },
        Some("ad") => HttpResponse::Ok().content_type("image/gif").body(GIF_BODY),
        // No `type`: treat as a listing query and echo it back verbatim.
        _ => HttpResponse::Ok().json(serde_json::json!({ "query": req.query_string() })),
    }
}

/// Start the mock origin on a random port and return its base URL.
pub async fn spawn_mock_origin() -> MockOrigin {
    let server = HttpServer::new(|| App::new().default_service(web::to(origin_handler)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock origin");
    let addr = server.addrs()[0];

    actix_web::rt::spawn(server.run());

    MockOrigin {
        base_url: format!("http://{addr}"),
    }
}

/// Gateway state pointed at `base_url` with the shared test credentials.
pub fn test_state(base_url: &str) -> AppState {
    let origin = OriginClient::new(OriginConfig::new(base_url, TEST_ISSUE_KEY))
        .expect("build origin client");
    AppState::new(SecurityConfig::new(TEST_SECRET), origin)
}
