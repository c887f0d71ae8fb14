//! Gated-route behavior of the verified token extractor.
//!
//! The gateway ships the extractor unmounted; integrators wrap gated
//! routes with it. These tests mount it on a sample route and drive the
//! full verification path over HTTP.

mod common;

use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use gateway::{issue_token, AccessToken, AppError, RequestTrace, SecurityConfig};
use gateway_test_support::assert_problem_details;

use common::{test_state, TEST_SECRET};

#[ctor::ctor]
fn init_test_logging() {
    gateway_test_support::logging::init();
}

async fn gated(token: AccessToken) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "rid": token.claims.rid })))
}

macro_rules! gated_app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(web::Data::new(test_state("http://127.0.0.1:1")))
                .route("/gated", web::get().to(gated)),
        )
        .await
    };
}

fn fresh_token(rid: &str) -> String {
    issue_token(rid, SystemTime::now(), &SecurityConfig::new(TEST_SECRET)).unwrap()
}

#[actix_web::test]
async fn bearer_token_grants_access() {
    let app = gated_app!();
    let token = fresh_token("IL041");

    let req = test::TestRequest::get()
        .uri("/gated")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["rid"], "IL041");
}

#[actix_web::test]
async fn query_token_grants_access() {
    let app = gated_app!();
    let token = fresh_token("VID7");

    let req = test::TestRequest::get()
        .uri(&format!("/gated?token={token}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["rid"], "VID7");
}

#[actix_web::test]
async fn missing_token_is_unauthorized() {
    let app = gated_app!();

    let req = test::TestRequest::get().uri("/gated").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
}

#[actix_web::test]
async fn expired_and_tampered_tokens_share_one_opaque_rejection() {
    let app = gated_app!();

    // Issued well past its 60 s lifetime.
    let expired = issue_token(
        "IL041",
        SystemTime::now() - Duration::from_secs(120),
        &SecurityConfig::new(TEST_SECRET),
    )
    .unwrap();

    let mut tampered = fresh_token("IL041");
    tampered.pop();

    for token in [expired, tampered] {
        let req = test::TestRequest::get()
            .uri(&format!("/gated?token={token}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            "UNAUTHORIZED",
            StatusCode::UNAUTHORIZED,
            Some("Invalid or expired access token"),
        )
        .await;
    }
}
