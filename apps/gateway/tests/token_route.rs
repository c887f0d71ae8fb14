mod common;

use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use gateway::{routes, verify_token, RequestTrace, SecurityConfig, TOKEN_TTL_MS};
use gateway_test_support::assert_problem_details;
use gateway_test_support::unique_str;

use common::{spawn_mock_origin, test_state, TEST_SECRET};

#[ctor::ctor]
fn init_test_logging() {
    gateway_test_support::logging::init();
}

#[actix_web::test]
async fn token_endpoint_issues_a_verifiable_token() {
    let origin = spawn_mock_origin().await;
    let state = test_state(&origin.base_url);

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let rid = unique_str("IL");
    let before = SystemTime::now();
    let req = test::TestRequest::get()
        .uri(&format!("/token?rid={rid}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token field");

    // Wire shape: two base64url segments, no padding.
    assert_eq!(token.matches('.').count(), 1);
    assert!(!token.contains(['+', '/', '=']));

    let claims =
        verify_token(token, SystemTime::now(), &SecurityConfig::new(TEST_SECRET)).expect("valid");
    assert_eq!(claims.rid, rid);

    let before_ms = before.duration_since(UNIX_EPOCH).unwrap().as_millis() as i64;
    assert!(claims.exp >= before_ms + TOKEN_TTL_MS);
    assert!(claims.exp <= before_ms + TOKEN_TTL_MS + 5_000);
}

#[actix_web::test]
async fn missing_rid_is_a_bad_request() {
    let origin = spawn_mock_origin().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(test_state(&origin.base_url)))
            .configure(routes::configure),
    )
    .await;

    for uri in ["/token", "/token?rid="] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "MISSING_RID", StatusCode::BAD_REQUEST, None).await;
    }
}

#[actix_web::test]
async fn non_get_methods_are_rejected() {
    let origin = spawn_mock_origin().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(test_state(&origin.base_url)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post().uri("/token?rid=IL041").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "METHOD_NOT_ALLOWED", StatusCode::METHOD_NOT_ALLOWED, None).await;

    let req = test::TestRequest::delete().uri("/token?rid=IL041").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "METHOD_NOT_ALLOWED", StatusCode::METHOD_NOT_ALLOWED, None).await;
}

#[actix_web::test]
async fn missing_secret_is_an_opaque_server_error() {
    let origin = spawn_mock_origin().await;
    let mut state = test_state(&origin.base_url);
    state.security = SecurityConfig::new(Vec::new());

    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/token?rid=IL041").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(
        resp,
        "CONFIG_ERROR",
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("Server configuration error"),
    )
    .await;
}
