//! Ritual API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

async fn create_ritual(app: &TestApp, token: &str, name: &str) -> String {
    let response = app
        .post(
            "/rituals",
            Some(token),
            json!({ "name": name, "category": "mind", "durationMinutes": 15 }),
        )
        .await;
    assert_status(&response, StatusCode::CREATED);
    response.body["ritual"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_ritual_crud() {
    let app = TestApp::new();
    let user = signup_user(&app, "crud@example.com").await;
    let id = create_ritual(&app, &user.token, "Meditate").await;

    let list = app.get("/rituals", Some(&user.token)).await;
    assert_status(&list, StatusCode::OK);
    assert_eq!(list.body["rituals"].as_array().unwrap().len(), 1);

    let fetched = app.get(&format!("/rituals/{}", id), Some(&user.token)).await;
    assert_eq!(fetched.body["ritual"]["name"], "Meditate");
    assert_eq!(fetched.body["ritual"]["durationMinutes"], 15);

    let updated = app
        .put(
            &format!("/rituals/{}", id),
            Some(&user.token),
            json!({ "name": "Meditate longer", "durationMinutes": 30 }),
        )
        .await;
    assert_status(&updated, StatusCode::OK);
    assert_eq!(updated.body["ritual"]["name"], "Meditate longer");
    assert_eq!(updated.body["ritual"]["category"], "mind");

    let deleted = app.delete(&format!("/rituals/{}", id), Some(&user.token)).await;
    assert_status(&deleted, StatusCode::OK);
    assert_error(
        &app.get(&format!("/rituals/{}", id), Some(&user.token)).await,
        StatusCode::NOT_FOUND,
    );
}

#[tokio::test]
async fn test_create_ritual_requires_fields() {
    let app = TestApp::new();
    let user = signup_user(&app, "fields@example.com").await;

    let response = app
        .post("/rituals", Some(&user.token), json!({ "durationMinutes": 10 }))
        .await;
    assert_eq!(assert_error(&response, StatusCode::BAD_REQUEST), "name is required");

    let response = app
        .post("/rituals", Some(&user.token), json!({ "name": "Walk" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_users_ritual_is_not_found() {
    let app = TestApp::new();
    let owner = signup_user(&app, "owner@example.com").await;
    let other = signup_user(&app, "other@example.com").await;
    let id = create_ritual(&app, &owner.token, "Journal").await;
    let uri = format!("/rituals/{}", id);

    assert_error(&app.get(&uri, Some(&other.token)).await, StatusCode::NOT_FOUND);
    assert_error(
        &app.put(&uri, Some(&other.token), json!({ "name": "Mine now" })).await,
        StatusCode::NOT_FOUND,
    );
    assert_error(&app.delete(&uri, Some(&other.token)).await, StatusCode::NOT_FOUND);

    // Untouched for the owner
    let fetched = app.get(&uri, Some(&owner.token)).await;
    assert_eq!(fetched.body["ritual"]["name"], "Journal");
    assert!(app
        .get("/rituals", Some(&other.token))
        .await
        .body["rituals"]
        .as_array()
        .unwrap()
        .is_empty());
}
