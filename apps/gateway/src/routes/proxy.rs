//! Public proxy routes for gated content.
//!
//! Each handler translates an inbound request into exactly one origin call
//! and mirrors the origin's status, end-to-end headers and body back to the
//! caller. Bodies stream through without buffering, so long video transfers
//! stay memory-bounded and a client abort drops the upstream connection.
//! Failures from the origin are passed through unchanged; nothing is
//! retried or synthesized here.

use actix_web::http::header::{HeaderName, HeaderValue, RANGE};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::services::origin::ContentKind;
use crate::state::app_state::AppState;

/// Hop-by-hop headers never forwarded across the proxy. Content-Length is
/// dropped with them: the mirrored body is re-framed by this server.
const SKIPPED_HEADERS: [&str; 9] = [
    "connection",
    "proxy-connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "content-length",
];

fn validated_id(id: &str) -> Result<&str, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::bad_request(
            "MISSING_CONTENT_ID",
            "Content id is required".to_string(),
        ));
    }
    Ok(id)
}

/// Mirror an origin response: same status (206 and friends included), same
/// end-to-end headers (`Content-Range`, `Content-Type`, caching headers),
/// streamed body.
fn mirror_response(upstream: reqwest::Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);

    for (name, value) in upstream.headers() {
        if SKIPPED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_str().as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        ) {
            builder.append_header((name, value));
        }
    }

    builder.streaming(upstream.bytes_stream())
}

fn inbound_range(req: &HttpRequest) -> Option<&str> {
    req.headers().get(RANGE).and_then(|v| v.to_str().ok())
}

async fn image(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let content_id = path.into_inner();
    validated_id(&content_id)?;

    let upstream = app_state
        .origin
        .fetch_content(&content_id, ContentKind::Image, None)
        .await?;
    Ok(mirror_response(upstream))
}

async fn video(
    req: HttpRequest,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let content_id = path.into_inner();
    validated_id(&content_id)?;

    // Range must survive the hop or seeking and partial downloads break.
    let upstream = app_state
        .origin
        .fetch_content(&content_id, ContentKind::Video, inbound_range(&req))
        .await?;
    Ok(mirror_response(upstream))
}

async fn ad(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let content_id = path.into_inner();
    validated_id(&content_id)?;

    let upstream = app_state
        .origin
        .fetch_content(&content_id, ContentKind::Ad, None)
        .await?;
    Ok(mirror_response(upstream))
}

async fn list(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let upstream = app_state.origin.fetch_list(req.query_string()).await?;
    Ok(mirror_response(upstream))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/proxy")
            .service(
                web::resource("/image/{id}")
                    .route(web::get().to(image))
                    .route(web::post().to(image)),
            )
            .route("/video/{id}", web::get().to(video))
            .route("/ad/{id}", web::get().to(ad))
            .route("/list", web::get().to(list)),
    );
}
