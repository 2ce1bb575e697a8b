//! Challenge API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

async fn create_challenge(app: &TestApp, token: &str, duration_days: i32, points: i32) -> Value {
    let response = app
        .post(
            "/challenges",
            Some(token),
            json!({
                "title": "Cold showers",
                "description": "One cold shower a day",
                "durationDays": duration_days,
                "points": points
            }),
        )
        .await;
    assert_status(&response, StatusCode::CREATED);
    response.body["challenge"]["id"].clone()
}

#[tokio::test]
async fn test_list_is_public_create_is_not() {
    let app = TestApp::new();
    let user = signup_user(&app, "creator@example.com").await;

    let unauthenticated = app
        .post("/challenges", None, json!({ "title": "x", "durationDays": 3 }))
        .await;
    assert_error(&unauthenticated, StatusCode::UNAUTHORIZED);

    create_challenge(&app, &user.token, 7, 50).await;
    let list = app.get("/challenges", None).await;
    assert_status(&list, StatusCode::OK);
    let challenges = list.body["challenges"].as_array().unwrap();
    assert_eq!(challenges.len(), 1);
    assert_eq!(challenges[0]["creatorId"], user.id.to_string());
}

#[tokio::test]
async fn test_create_challenge_validation() {
    let app = TestApp::new();
    let user = signup_user(&app, "creator@example.com").await;

    let zero_days = app
        .post(
            "/challenges",
            Some(&user.token),
            json!({ "title": "Nothing", "description": "none", "durationDays": 0 }),
        )
        .await;
    assert_error(&zero_days, StatusCode::BAD_REQUEST);

    let negative_points = app
        .post(
            "/challenges",
            Some(&user.token),
            json!({ "title": "Debt", "description": "none", "durationDays": 2, "points": -5 }),
        )
        .await;
    assert_error(&negative_points, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_twice_is_rejected() {
    let app = TestApp::new();
    let user = signup_user(&app, "joiner@example.com").await;
    let challenge_id = create_challenge(&app, &user.token, 7, 50).await;

    let joined = app
        .post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;
    assert_status(&joined, StatusCode::CREATED);
    assert_eq!(joined.body["enrollment"]["status"], "active");

    let again = app
        .post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;
    assert_eq!(
        assert_error(&again, StatusCode::BAD_REQUEST),
        "Already joined this challenge"
    );

    let mine = app.get("/challenges/my", Some(&user.token)).await;
    assert_eq!(mine.body["active"].as_array().unwrap().len(), 1);
    assert_eq!(mine.body["stats"]["activeCount"], 1);
}

#[tokio::test]
async fn test_join_missing_challenge() {
    let app = TestApp::new();
    let user = signup_user(&app, "joiner@example.com").await;

    let response = app
        .post(
            "/challenges/join",
            Some(&user.token),
            json!({ "challengeId": Uuid::new_v4() }),
        )
        .await;
    assert_eq!(assert_error(&response, StatusCode::NOT_FOUND), "Challenge not found");

    let missing_field = app.post("/challenges/join", Some(&user.token), json!({})).await;
    assert_error(&missing_field, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_in_completes_and_awards_points() {
    let app = TestApp::new();
    let user = signup_user(&app, "finisher@example.com").await;
    let challenge_id = create_challenge(&app, &user.token, 1, 40).await;
    let id = challenge_id.as_str().unwrap();

    app.post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;

    let checked_in = app
        .post(&format!("/challenges/{}/checkin", id), Some(&user.token), json!({}))
        .await;
    assert_status(&checked_in, StatusCode::OK);
    assert_eq!(checked_in.body["pointsAwarded"], 40);
    assert_eq!(checked_in.body["enrollment"]["status"], "completed");
    assert_eq!(checked_in.body["enrollment"]["completedDays"], 1);

    let me = app.get("/auth/me", Some(&user.token)).await;
    assert_eq!(me.body["user"]["totalPoints"], 40);
    assert_eq!(me.body["user"]["level"], 1);

    let mine = app.get("/challenges/my", Some(&user.token)).await;
    assert!(mine.body["active"].as_array().unwrap().is_empty());
    assert_eq!(mine.body["completed"].as_array().unwrap().len(), 1);
    assert_eq!(mine.body["stats"]["totalPoints"], 40);

    // Completed is not active, and still blocks joining again
    let again = app
        .post(&format!("/challenges/{}/checkin", id), Some(&user.token), json!({}))
        .await;
    assert_error(&again, StatusCode::BAD_REQUEST);
    let rejoin = app
        .post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;
    assert_error(&rejoin, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_in_once_per_day() {
    let app = TestApp::new();
    let user = signup_user(&app, "daily@example.com").await;
    let challenge_id = create_challenge(&app, &user.token, 5, 10).await;
    let uri = format!("/challenges/{}/checkin", challenge_id.as_str().unwrap());

    app.post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;

    let first = app.post(&uri, Some(&user.token), json!({})).await;
    assert_status(&first, StatusCode::OK);
    assert_eq!(first.body["pointsAwarded"], 0);
    assert_eq!(first.body["enrollment"]["streak"], 1);

    let second = app.post(&uri, Some(&user.token), json!({})).await;
    assert_error(&second, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_in_without_enrollment() {
    let app = TestApp::new();
    let user = signup_user(&app, "lurker@example.com").await;
    let challenge_id = create_challenge(&app, &user.token, 3, 10).await;

    let response = app
        .post(
            &format!("/challenges/{}/checkin", challenge_id.as_str().unwrap()),
            Some(&user.token),
            json!({}),
        )
        .await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_abandon_allows_rejoin() {
    let app = TestApp::new();
    let user = signup_user(&app, "quitter@example.com").await;
    let challenge_id = create_challenge(&app, &user.token, 10, 10).await;
    let abandon_uri = format!("/challenges/{}/abandon", challenge_id.as_str().unwrap());

    app.post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;
    let abandoned = app.post(&abandon_uri, Some(&user.token), json!({})).await;
    assert_status(&abandoned, StatusCode::OK);
    assert_eq!(abandoned.body["enrollment"]["status"], "abandoned");

    // Nothing open left to abandon
    assert_error(
        &app.post(&abandon_uri, Some(&user.token), json!({})).await,
        StatusCode::NOT_FOUND,
    );

    let rejoined = app
        .post("/challenges/join", Some(&user.token), json!({ "challengeId": challenge_id }))
        .await;
    assert_status(&rejoined, StatusCode::CREATED);

    let mine = app.get("/challenges/my", Some(&user.token)).await;
    assert_eq!(mine.body["active"].as_array().unwrap().len(), 1);
}
