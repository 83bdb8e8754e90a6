//! Assertions for the scoreboard's JSON error responses.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the service's error body, kept local so this crate stays
/// independent of the scoreboard types.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Assert that response parts carry the error contract:
/// - status matches `expected_status`
/// - body is JSON with a non-empty `error` field and the expected `code`
/// - `x-trace-id` header equals the body's `trace_id`
/// - `Access-Control-Allow-Origin: *` is present
///
/// Returns the parsed body for further checks.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "error body should be JSON ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        )
    });

    assert!(!body.error.is_empty(), "error field should not be empty");
    assert_eq!(body.code, expected_code);
    assert_eq!(body.status, expected_status.as_u16());

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    let origin = headers
        .get("access-control-allow-origin")
        .expect("access-control-allow-origin header should be present");
    assert_eq!(origin, "*");

    body
}

/// Same as [`assert_error_parts`], reading from a test `ServiceResponse`.
pub async fn assert_error_response<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_parts(status, &headers, &body, expected_code, expected_status)
}
