use crate::e2e::helpers;

use helpers::{fixtures::TEST_PASSWORD, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_register_new_user(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/register",
            &json!({"username": "alice", "password": "s3cret-pass"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["message"], "User registered successfully");

    let stored = ctx.fixtures.password_hash_for("alice").await.unwrap();
    let stored = stored.expect("user row should exist");
    assert_ne!(stored, "s3cret-pass");
    assert!(stored.starts_with("$argon2"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_duplicate_username(ctx: &TestContext) {
    ctx.client
        .post("/api/register", &json!({"username": "bob", "password": "first-pw"}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .post("/api/register", &json!({"username": "bob", "password": "other"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::CONFLICT)
        .assert_error("Username already exists");
    assert_eq!(ctx.fixtures.count_users().await.unwrap(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_original_credentials_after_duplicate_registration(ctx: &TestContext) {
    ctx.client
        .post("/api/register", &json!({"username": "bob", "password": "first-pw"}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    ctx.client
        .post("/api/register", &json!({"username": "bob", "password": "second-pw"}))
        .await
        .unwrap()
        .assert_status(StatusCode::CONFLICT);

    let stored_id: uuid::Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind("bob")
        .fetch_one(&ctx.pool)
        .await
        .unwrap();

    let response = ctx
        .client
        .post("/api/login", &json!({"username": "bob", "password": "first-pw"}))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["user_id"], stored_id.to_string());

    ctx.client
        .post("/api/login", &json!({"username": "bob", "password": "second-pw"}))
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Invalid username or password");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_username_and_password(ctx: &TestContext) {
    for body in [
        json!({"username": "carol"}),
        json!({"password": "pw"}),
        json!({"username": "", "password": "pw"}),
        json!({"username": 42, "password": "pw"}),
    ] {
        let response = ctx.client.post("/api/register", &body).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error("Username and password are required");
    }

    let response = ctx.client.post_raw("/api/login", "").await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Username and password are required");

    assert_eq!(ctx.fixtures.count_users().await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_login_registered_user(ctx: &TestContext) {
    ctx.client
        .post("/api/register", &json!({"username": "dave", "password": "pw-123"}))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .post("/api/login", &json!({"username": "dave", "password": "pw-123"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["message"], "Login successful");
    let user_id = body["user_id"].as_str().expect("user_id is a string");
    assert!(uuid::Uuid::parse_str(user_id).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_id_of_existing_user_on_login(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("erin").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/login",
            &json!({"username": "erin", "password": TEST_PASSWORD}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["user_id"], user.id.to_string());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_wrong_password_and_unknown_user_alike(ctx: &TestContext) {
    ctx.fixtures.create_user("frank").await.unwrap();

    let wrong_password = ctx
        .client
        .post("/api/login", &json!({"username": "frank", "password": "nope"}))
        .await
        .unwrap();
    wrong_password
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Invalid username or password");

    let unknown_user = ctx
        .client
        .post("/api/login", &json!({"username": "ghost", "password": "nope"}))
        .await
        .unwrap();
    unknown_user
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error("Invalid username or password");
}
