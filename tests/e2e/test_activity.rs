use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

const ARTICLE_URL: &str = "https://news.example.com/rust-2";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_record_activity(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("reader").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/activity",
            &json!({
                "user_id": user.id,
                "article_url": ARTICLE_URL,
                "article_title": "Rust 2.0 released",
                "time_spent": 42.5,
                "liked": true,
                "clicked_full_article": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["message"], "Activity recorded");

    let activities = ctx.fixtures.activities_for(user.id).await.unwrap();
    assert_eq!(activities.len(), 1);

    let activity = &activities[0];
    assert_eq!(activity.user_id, user.id);
    assert_eq!(activity.article_url, ARTICLE_URL);
    assert_eq!(activity.article_title, "Rust 2.0 released");
    assert_eq!(activity.time_spent, 42.5);
    assert_eq!(activity.liked, Some(true));
    assert!(activity.clicked_full_article);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reuse_article_row_for_same_url(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("repeat").await.unwrap();

    for (title, time_spent) in [("First title", 10.0), ("Second title", 20.0)] {
        ctx.client
            .post(
                "/api/activity",
                &json!({
                    "user_id": user.id,
                    "article_url": ARTICLE_URL,
                    "article_title": title,
                    "time_spent": time_spent
                }),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    assert_eq!(ctx.fixtures.count_articles(ARTICLE_URL).await.unwrap(), 1);

    let activities = ctx.fixtures.activities_for(user.id).await.unwrap();
    assert_eq!(activities.len(), 2);
    // The first title recorded for a URL is kept
    assert!(activities.iter().all(|a| a.article_title == "First title"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_defaults_for_optional_fields(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("minimal").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/activity",
            &json!({"user_id": user.id, "article_url": ARTICLE_URL}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let activities = ctx.fixtures.activities_for(user.id).await.unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].article_title, "Unknown");
    assert_eq!(activities[0].time_spent, 0.0);
    assert_eq!(activities[0].liked, None);
    assert!(!activities[0].clicked_full_article);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_user_id_and_article_url(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("partial").await.unwrap();

    for body in [
        json!({"article_url": ARTICLE_URL}),
        json!({"user_id": user.id}),
        json!({"user_id": user.id, "article_url": "   "}),
    ] {
        let response = ctx.client.post("/api/activity", &body).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error("user_id and article_url are required");
    }

    assert_eq!(ctx.fixtures.count_articles(ARTICLE_URL).await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_wrongly_typed_fields(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("typed").await.unwrap();

    for body in [
        json!({"user_id": user.id, "article_url": ARTICLE_URL, "liked": "yes"}),
        json!({"user_id": "not-a-uuid", "article_url": ARTICLE_URL}),
    ] {
        let response = ctx.client.post("/api/activity", &body).await.unwrap();
        response.assert_status(StatusCode::BAD_REQUEST);

        let error = response.json()["error"].as_str().unwrap();
        assert!(
            error.starts_with("Invalid activity: "),
            "unexpected error message: {}",
            error
        );
    }

    let response = ctx.client.post_raw("/api/activity", "").await.unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("user_id and article_url are required");

    assert_eq!(ctx.fixtures.count_articles(ARTICLE_URL).await.unwrap(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_negative_time_spent(ctx: &TestContext) {
    let user = ctx.fixtures.create_user("negative").await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/activity",
            &json!({"user_id": user.id, "article_url": ARTICLE_URL, "time_spent": -3}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("time_spent must be a non-negative number of seconds");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_user(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/activity",
            &json!({"user_id": Uuid::new_v4(), "article_url": ARTICLE_URL}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("User not found");

    // The article insert rolls back with the failed activity
    assert_eq!(ctx.fixtures.count_articles(ARTICLE_URL).await.unwrap(), 0);
}
