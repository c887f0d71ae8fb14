//! Assertions for the gateway's stable error contract.
//!
//! Error responses are RFC 7807 problem documents with a `code` and a
//! `trace_id` that must match the `x-trace-id` response header.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the gateway's problem document, declared locally so tests
/// validate the serialized shape rather than a shared struct.
#[derive(Debug, Deserialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that `resp` conforms to the error contract:
/// status and `code` match, the body is problem+json, and the body
/// `trace_id` equals the `x-trace-id` header. Optionally require a
/// substring of `detail`.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.contains("application/problem+json"),
        "unexpected content type: {content_type}"
    );

    let problem: ProblemDetailsLike =
        serde_json::from_slice(&body).expect("body should be a problem details document");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.title.is_empty());
    assert!(problem.type_.ends_with(&problem.code.to_uppercase()));

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "expected detail to contain '{expected_detail}', got '{}'",
            problem.detail
        );
    }
}
