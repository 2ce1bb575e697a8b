//! Mood API integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_log_and_list_mood() {
    let app = TestApp::new();
    let user = signup_user(&app, "mood@example.com").await;

    let logged = app
        .post("/mood", Some(&user.token), json!({ "mood": 7, "note": "sunny" }))
        .await;
    assert_status(&logged, StatusCode::OK);
    assert_eq!(logged.body["entry"]["mood"], 7);
    assert_eq!(logged.body["entry"]["note"], "sunny");

    let list = app.get("/mood", Some(&user.token)).await;
    assert_eq!(list.body["entries"].as_array().unwrap().len(), 1);

    let other = signup_user(&app, "other@example.com").await;
    let list = app.get("/mood", Some(&other.token)).await;
    assert!(list.body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_mood_validation() {
    let app = TestApp::new();
    let user = signup_user(&app, "mood@example.com").await;

    let missing = app.post("/mood", Some(&user.token), json!({})).await;
    assert_eq!(assert_error(&missing, StatusCode::BAD_REQUEST), "mood is required");

    for mood in [0, 11, -3] {
        let response = app.post("/mood", Some(&user.token), json!({ "mood": mood })).await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }
    assert!(app
        .get("/mood", Some(&user.token))
        .await
        .body["entries"]
        .as_array()
        .unwrap()
        .is_empty());
}
