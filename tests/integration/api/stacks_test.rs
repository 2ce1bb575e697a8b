//! Habit stack API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

async fn ritual(app: &TestApp, token: &str, name: &str) -> Value {
    let response = app
        .post("/rituals", Some(token), json!({ "name": name, "durationMinutes": 5 }))
        .await;
    response.body["ritual"]["id"].clone()
}

#[tokio::test]
async fn test_create_list_delete_stack() {
    let app = TestApp::new();
    let user = signup_user(&app, "stacker@example.com").await;
    let first = ritual(&app, &user.token, "Water").await;
    let second = ritual(&app, &user.token, "Stretch").await;

    let created = app
        .post(
            "/stacks",
            Some(&user.token),
            json!({ "name": "Morning", "ritualIds": [first, second] }),
        )
        .await;
    assert_status(&created, StatusCode::CREATED);
    // Order is kept as given
    assert_eq!(created.body["stack"]["ritualIds"], json!([first, second]));
    let id = created.body["stack"]["id"].as_str().unwrap().to_string();

    let list = app.get("/stacks", Some(&user.token)).await;
    assert_eq!(list.body["stacks"].as_array().unwrap().len(), 1);

    let deleted = app.delete(&format!("/stacks/{}", id), Some(&user.token)).await;
    assert_status(&deleted, StatusCode::OK);
    assert!(app
        .get("/stacks", Some(&user.token))
        .await
        .body["stacks"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_stack_validation() {
    let app = TestApp::new();
    let user = signup_user(&app, "stacker@example.com").await;

    let empty = app
        .post("/stacks", Some(&user.token), json!({ "name": "Nothing", "ritualIds": [] }))
        .await;
    assert_error(&empty, StatusCode::BAD_REQUEST);

    let unnamed = app
        .post("/stacks", Some(&user.token), json!({ "ritualIds": [] }))
        .await;
    assert_eq!(assert_error(&unnamed, StatusCode::BAD_REQUEST), "name is required");
}

#[tokio::test]
async fn test_stack_with_foreign_ritual() {
    let app = TestApp::new();
    let owner = signup_user(&app, "owner@example.com").await;
    let other = signup_user(&app, "other@example.com").await;
    let mine = ritual(&app, &other.token, "Read").await;
    let theirs = ritual(&app, &owner.token, "Write").await;

    let response = app
        .post(
            "/stacks",
            Some(&other.token),
            json!({ "name": "Borrowed", "ritualIds": [mine, theirs] }),
        )
        .await;
    assert_error(&response, StatusCode::NOT_FOUND);
    assert!(app
        .get("/stacks", Some(&other.token))
        .await
        .body["stacks"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_other_users_stack() {
    let app = TestApp::new();
    let owner = signup_user(&app, "owner@example.com").await;
    let other = signup_user(&app, "other@example.com").await;
    let id = ritual(&app, &owner.token, "Floss").await;
    let created = app
        .post(
            "/stacks",
            Some(&owner.token),
            json!({ "name": "Night", "ritualIds": [id] }),
        )
        .await;
    let uri = format!("/stacks/{}", created.body["stack"]["id"].as_str().unwrap());

    assert_error(&app.delete(&uri, Some(&other.token)).await, StatusCode::NOT_FOUND);
    assert_eq!(
        app.get("/stacks", Some(&owner.token)).await.body["stacks"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_deleting_ritual_removes_it_from_stacks() {
    let app = TestApp::new();
    let user = signup_user(&app, "pruner@example.com").await;
    let kept = ritual(&app, &user.token, "Water").await;
    let removed = ritual(&app, &user.token, "Stretch").await;
    app.post(
        "/stacks",
        Some(&user.token),
        json!({ "name": "Morning", "ritualIds": [removed, kept] }),
    )
    .await;

    let deleted = app
        .delete(
            &format!("/rituals/{}", removed.as_str().unwrap()),
            Some(&user.token),
        )
        .await;
    assert_status(&deleted, StatusCode::OK);

    let list = app.get("/stacks", Some(&user.token)).await;
    assert_eq!(list.body["stacks"][0]["ritualIds"], json!([kept]));
}
