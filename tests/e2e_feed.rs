// tests/e2e_feed.rs
use axum::http::StatusCode;
use bronews::domain::user::Role;
use serde_json::Value;

mod support;

use support::{TestApp, body_json};

fn titles(feed: &Value) -> Vec<&str> {
    feed.as_array()
        .expect("feed is an array")
        .iter()
        .map(|item| item["title"].as_str().expect("title"))
        .collect()
}

/// Only approved articles by followed journalists make it into the feed.
#[tokio::test]
async fn feed_contains_approved_articles_of_followed_journalists_only() {
    let app = TestApp::new();
    let reader = app.user("rita", Role::Reader, Some("r@example.com")).await;
    let j = app.user("jack", Role::Journalist, None).await;
    let j2 = app.user("jill", Role::Journalist, None).await;
    app.article(j, "A1", true).await;
    app.article(j, "A2", false).await;
    app.article(j2, "A3", true).await;
    app.follow_journalist(reader, j).await;

    let resp = app.get("/api/sub-articles/", Some(reader)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let feed = body_json(resp).await;
    assert_eq!(titles(&feed), vec!["A1"]);
    assert_eq!(feed[0]["is_approved"], Value::Bool(true));
    assert_eq!(feed[0]["author"], Value::from(j));
}

#[tokio::test]
async fn feed_is_evaluated_on_every_request() {
    let app = TestApp::new();
    let reader = app.user("rita", Role::Reader, None).await;
    let j = app.user("jack", Role::Journalist, None).await;
    let draft = app.article(j, "Later", false).await;
    app.follow_journalist(reader, j).await;

    let before = body_json(app.get("/api/sub-articles/", Some(reader)).await).await;
    assert!(titles(&before).is_empty());

    app.store
        .force_approve(bronews::domain::content::ContentKind::Article, draft);

    let after = body_json(app.get("/api/sub-articles/", Some(reader)).await).await;
    assert_eq!(titles(&after), vec!["Later"]);
}

#[tokio::test]
async fn reader_without_subscriptions_gets_empty_feed() {
    let app = TestApp::new();
    let reader = app.user("rita", Role::Reader, None).await;
    let j = app.user("jack", Role::Journalist, None).await;
    app.article(j, "A1", true).await;

    let resp = app.get("/api/sub-articles/", Some(reader)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, Value::Array(vec![]));
}

/// Newsletters never show up in the article feed.
#[tokio::test]
async fn feed_ignores_newsletters() {
    let app = TestApp::new();
    let reader = app.user("rita", Role::Reader, None).await;
    let j = app.user("jack", Role::Journalist, None).await;
    app.content(bronews::domain::content::ContentKind::Newsletter, j, "Weekly", true)
        .await;
    app.follow_journalist(reader, j).await;

    let feed = body_json(app.get("/api/sub-articles/", Some(reader)).await).await;
    assert!(titles(&feed).is_empty());
}

#[tokio::test]
async fn feed_is_forbidden_for_non_readers() {
    let app = TestApp::new();
    for (name, role) in [
        ("joe", Role::Journalist),
        ("eddie", Role::Editor),
        ("ada", Role::Admin),
    ] {
        let id = app.user(name, role, None).await;
        let resp = app.get("/api/sub-articles/", Some(id)).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "role {role}");
        let body = body_json(resp).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap_or_default()
                .contains("Only authenticated readers"),
            "unexpected body: {body}"
        );
    }
}

#[tokio::test]
async fn feed_is_forbidden_without_credentials() {
    let app = TestApp::new();
    let resp = app.get("/api/sub-articles/", None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

/// A token that does not verify makes the caller anonymous, and anonymous
/// callers are refused like any other non-reader.
#[tokio::test]
async fn invalid_bearer_token_is_forbidden() {
    let app = TestApp::new();
    let request = axum::http::Request::get("/api/sub-articles/")
        .header(axum::http::header::AUTHORIZATION, "Bearer not-a-token")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.send(request).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Only authenticated readers"),
        "unexpected body: {body}"
    );
}
