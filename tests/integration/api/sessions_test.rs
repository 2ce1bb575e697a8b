//! Session API integration tests, including streak accounting

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

async fn start(app: &TestApp, token: &str, body: serde_json::Value) -> String {
    let response = app.post("/sessions", Some(token), body).await;
    assert_status(&response, StatusCode::CREATED);
    response.body["session"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_start_and_complete_session() {
    let app = TestApp::new();
    let user = signup_user(&app, "session@example.com").await;
    let ritual = app
        .post(
            "/rituals",
            Some(&user.token),
            json!({ "name": "Run", "durationMinutes": 20 }),
        )
        .await;
    let ritual_id = ritual.body["ritual"]["id"].clone();

    let id = start(&app, &user.token, json!({ "ritualId": ritual_id, "moodBefore": 4 })).await;

    let completed = app
        .post(
            &format!("/sessions/{}/complete", id),
            Some(&user.token),
            json!({ "moodAfter": 8, "notes": "felt great" }),
        )
        .await;
    assert_status(&completed, StatusCode::OK);
    assert!(completed.body["session"]["completedAt"].is_string());
    assert_eq!(completed.body["session"]["moodAfter"], 8);
    assert_eq!(completed.body["streak"], json!({ "current": 1, "longest": 1 }));

    // Stored counter follows the computed streak
    let me = app.get("/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["user"]["streakCount"], 1);

    let stats = app.get("/stats", Some(&user.token)).await;
    assert_status(&stats, StatusCode::OK);
    assert_eq!(
        stats.body,
        json!({
            "currentStreak": 1,
            "longestStreak": 1,
            "totalPoints": 0,
            "level": 1,
            "completedSessions": 1
        })
    );
}

#[tokio::test]
async fn test_same_day_completions_count_once() {
    let app = TestApp::new();
    let user = signup_user(&app, "twice@example.com").await;

    for _ in 0..2 {
        let id = start(&app, &user.token, json!({})).await;
        let completed = app
            .post(&format!("/sessions/{}/complete", id), Some(&user.token), json!({}))
            .await;
        assert_eq!(completed.body["streak"]["current"], 1);
    }

    let stats = app.get("/stats", Some(&user.token)).await;
    assert_eq!(stats.body["currentStreak"], 1);
    assert_eq!(stats.body["completedSessions"], 2);
}

#[tokio::test]
async fn test_complete_twice_is_rejected() {
    let app = TestApp::new();
    let user = signup_user(&app, "again@example.com").await;
    let id = start(&app, &user.token, json!({})).await;
    let uri = format!("/sessions/{}/complete", id);

    assert_status(&app.post(&uri, Some(&user.token), json!({})).await, StatusCode::OK);
    assert_error(
        &app.post(&uri, Some(&user.token), json!({ "moodAfter": 2 })).await,
        StatusCode::BAD_REQUEST,
    );

    let list = app.get("/sessions", Some(&user.token)).await;
    assert_eq!(list.body["sessions"][0]["moodAfter"], json!(null));
}

#[tokio::test]
async fn test_mood_bounds() {
    let app = TestApp::new();
    let user = signup_user(&app, "bounds@example.com").await;

    assert_error(
        &app.post("/sessions", Some(&user.token), json!({ "moodBefore": 0 })).await,
        StatusCode::BAD_REQUEST,
    );
    let id = start(&app, &user.token, json!({ "moodBefore": 10 })).await;
    assert_error(
        &app.post(
            &format!("/sessions/{}/complete", id),
            Some(&user.token),
            json!({ "moodAfter": 11 }),
        )
        .await,
        StatusCode::BAD_REQUEST,
    );
}

#[tokio::test]
async fn test_session_with_foreign_ritual() {
    let app = TestApp::new();
    let owner = signup_user(&app, "owner@example.com").await;
    let other = signup_user(&app, "other@example.com").await;
    let ritual = app
        .post(
            "/rituals",
            Some(&owner.token),
            json!({ "name": "Swim", "durationMinutes": 40 }),
        )
        .await;

    let response = app
        .post(
            "/sessions",
            Some(&other.token),
            json!({ "ritualId": ritual.body["ritual"]["id"] }),
        )
        .await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_session() {
    let app = TestApp::new();
    let owner = signup_user(&app, "owner@example.com").await;
    let other = signup_user(&app, "other@example.com").await;
    let id = start(&app, &owner.token, json!({})).await;
    let uri = format!("/sessions/{}", id);

    assert_error(&app.delete(&uri, Some(&other.token)).await, StatusCode::NOT_FOUND);
    assert_status(&app.delete(&uri, Some(&owner.token)).await, StatusCode::OK);
    assert_error(&app.delete(&uri, Some(&owner.token)).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_for_new_user() {
    let app = TestApp::new();
    let user = signup_user(&app, "fresh@example.com").await;
    let stats = app.get("/stats", Some(&user.token)).await;
    assert_eq!(stats.body["currentStreak"], 0);
    assert_eq!(stats.body["longestStreak"], 0);
    assert_eq!(stats.body["completedSessions"], 0);
}

#[tokio::test]
async fn test_complete_without_body() {
    let app = TestApp::new();
    let user = signup_user(&app, "nobody@example.com").await;
    let id = start(&app, &user.token, json!({ "moodBefore": 5 })).await;

    let completed = app
        .request(
            Method::POST,
            &format!("/sessions/{}/complete", id),
            Some(&user.token),
            None,
        )
        .await;
    assert_status(&completed, StatusCode::OK);
    assert!(completed.body["session"]["completedAt"].is_string());
    assert_eq!(completed.body["session"]["moodAfter"], json!(null));
    assert_eq!(completed.body["streak"]["current"], 1);
}
