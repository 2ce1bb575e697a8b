//! Marketplace API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

async fn publish(app: &TestApp, token: &str) -> Value {
    let response = app
        .post(
            "/marketplace",
            Some(token),
            json!({
                "name": "Box breathing",
                "category": "mind",
                "durationMinutes": 5,
                "description": "4-4-4-4"
            }),
        )
        .await;
    assert_status(&response, StatusCode::CREATED);
    assert_eq!(response.body["ritual"]["usesCount"], 0);
    response.body["ritual"]["id"].clone()
}

#[tokio::test]
async fn test_publish_and_list() {
    let app = TestApp::new();
    let author = signup_user(&app, "author@example.com").await;
    publish(&app, &author.token).await;

    let list = app.get("/marketplace", None).await;
    assert_status(&list, StatusCode::OK);
    let rituals = list.body["rituals"].as_array().unwrap();
    assert_eq!(rituals.len(), 1);
    assert_eq!(rituals[0]["authorId"], author.id.to_string());

    let unauthenticated = app
        .post("/marketplace", None, json!({ "name": "x", "durationMinutes": 5 }))
        .await;
    assert_error(&unauthenticated, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rate_and_use() {
    let app = TestApp::new();
    let author = signup_user(&app, "author@example.com").await;
    let fan = signup_user(&app, "fan@example.com").await;
    let id = publish(&app, &author.token).await;

    let first = app
        .post("/marketplace/rate", Some(&fan.token), json!({ "ritualId": id, "rating": 5 }))
        .await;
    assert_status(&first, StatusCode::OK);
    assert_eq!(first.body["rating"], 5.0);

    let used = app
        .post("/marketplace/use", Some(&fan.token), json!({ "ritualId": id }))
        .await;
    assert_status(&used, StatusCode::CREATED);
    assert_eq!(used.body["ritual"]["userId"], fan.id.to_string());
    assert_eq!(used.body["ritual"]["name"], "Box breathing");

    let mine = app.get("/rituals", Some(&fan.token)).await;
    assert_eq!(mine.body["rituals"].as_array().unwrap().len(), 1);

    let list = app.get("/marketplace", None).await;
    assert_eq!(list.body["rituals"][0]["usesCount"], 1);

    // (5 * 1 + 3) / 2
    let second = app
        .post("/marketplace/rate", Some(&fan.token), json!({ "ritualId": id, "rating": 3 }))
        .await;
    assert_eq!(second.body["rating"], 4.0);
}

#[tokio::test]
async fn test_rating_out_of_range() {
    let app = TestApp::new();
    let author = signup_user(&app, "author@example.com").await;
    let id = publish(&app, &author.token).await;

    for rating in [0, 6] {
        let response = app
            .post(
                "/marketplace/rate",
                Some(&author.token),
                json!({ "ritualId": id, "rating": rating }),
            )
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }

    let list = app.get("/marketplace", None).await;
    assert_eq!(list.body["rituals"][0]["rating"], 0.0);
}

#[tokio::test]
async fn test_missing_community_ritual() {
    let app = TestApp::new();
    let user = signup_user(&app, "user@example.com").await;
    let missing = Uuid::new_v4();

    let rate = app
        .post(
            "/marketplace/rate",
            Some(&user.token),
            json!({ "ritualId": missing, "rating": 4 }),
        )
        .await;
    assert_eq!(assert_error(&rate, StatusCode::NOT_FOUND), "Ritual not found");

    let used = app
        .post("/marketplace/use", Some(&user.token), json!({ "ritualId": missing }))
        .await;
    assert_error(&used, StatusCode::NOT_FOUND);
}
