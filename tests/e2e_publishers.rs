// tests/e2e_publishers.rs
use axum::http::StatusCode;
use bronews::domain::user::Role;

mod support;

use support::{TestApp, assert_redirect, body_json};

#[tokio::test]
async fn creating_a_publisher_makes_the_creator_its_admin() {
    let app = TestApp::new();
    let boss = app.user("boss", Role::Admin, None).await;

    let resp = app
        .post_form(
            "/create-publisher/",
            Some(boss),
            "name=Daily+Planet&content=Metropolis+news",
        )
        .await;
    assert_eq!(
        assert_redirect(&resp, "/"),
        "Publisher created successfully!"
    );

    let list = body_json(app.get("/publisher-list/", Some(boss)).await).await;
    assert_eq!(list["publishers"][0]["name"], "Daily Planet");
    assert_eq!(list["publishers"][0]["admin_id"], boss);
    assert_eq!(list["publishers"][0]["content"], "Metropolis news");

    let dashboard = body_json(app.get("/admin-dashboard/", Some(boss)).await).await;
    assert_eq!(dashboard["publishers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_publisher_name_is_a_conflict() {
    let app = TestApp::new();
    let boss = app.user("boss", Role::Admin, None).await;
    app.publisher(boss, "Daily Planet").await;

    let resp = app
        .post_form("/create-publisher/", Some(boss), "name=Daily+Planet")
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn publishers_require_login() {
    let app = TestApp::new();

    let create = app
        .post_form("/create-publisher/", None, "name=Daily+Planet")
        .await;
    assert_eq!(
        assert_redirect(&create, "/accounts/login/"),
        "You must be logged in to create a publisher."
    );

    let list = app.get("/publisher-list/", None).await;
    assert_eq!(
        assert_redirect(&list, "/accounts/login/"),
        "You must be logged in to view publishers."
    );
}

#[tokio::test]
async fn publisher_detail_shows_only_visible_content() {
    let app = TestApp::new();
    let boss = app.user("boss", Role::Admin, None).await;
    let reader = app.user("rita", Role::Reader, None).await;
    let publisher = app.publisher(boss, "Daily Planet").await;

    let resp = app
        .get(&format!("/publisher-details/{publisher}/"), Some(reader))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_json(resp).await;
    assert_eq!(page["is_subscribed"], serde_json::Value::Bool(false));

    let missing = app.get("/publisher-details/99/", Some(reader)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_dashboard_is_for_admins() {
    let app = TestApp::new();
    let j = app.user("jack", Role::Journalist, None).await;

    let resp = app.get("/admin-dashboard/", Some(j)).await;
    assert_redirect(&resp, "/");
}
