use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_readiness_of_each_dependency(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["news_provider"], "configured");
    assert_eq!(body["summarizer"], "configured");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_service_banner(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["message"], "Welcome to News Digest API");
    assert_eq!(body["status"], "running");
    assert_eq!(
        body["api_keys_configured"].as_bool(),
        Some(ctx.config.api_keys_configured())
    );

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_test_route(ctx: &TestContext) {
    let response = ctx.client.get("/test").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["message"], "Test route is working!");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_request_id_when_missing(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_header_exists("x-request-id");
    let request_id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/test", "x-request-id", "trace-abc-123")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("x-request-id").map(String::as_str),
        Some("trace-abc-123")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/api/unknown").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
