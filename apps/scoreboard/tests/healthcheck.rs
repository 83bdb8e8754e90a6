mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use scoreboard::state::app_state::AppState;
use serde_json::Value;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_health_endpoint() {
    let state = build_test_state().await.expect("build test state");
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn test_health_reports_missing_database() {
    let app = create_test_app(AppState::new_without_db()).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"]
        .as_str()
        .unwrap()
        .starts_with("DB unavailable"));
}
