//! Authentication test helpers

use chrono::{DateTime, Utc};
use ritualos::backend::auth::tokens::TokenSigner;
use serde_json::json;
use uuid::Uuid;

use super::app::{TestApp, TEST_SECRET};

pub const TEST_PASSWORD: &str = "password123";

/// A signed-up user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

/// Sign up through the API
pub async fn signup_user(app: &TestApp, email: &str) -> TestUser {
    let response = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": email, "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(response.status, axum::http::StatusCode::CREATED, "{:?}", response.body);

    TestUser {
        id: response.body["user"]["id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("signup returns the user id"),
        email: email.to_string(),
        token: response.body["token"]
            .as_str()
            .expect("signup returns a token")
            .to_string(),
    }
}

/// A token signed with the test secret, issued at `issued_at`
pub fn token_issued_at(user_id: Uuid, email: &str, issued_at: DateTime<Utc>) -> String {
    TokenSigner::new(TEST_SECRET.as_bytes())
        .issue_at(user_id, email, issued_at)
        .unwrap()
}

/// A currently valid token for an arbitrary user id
pub fn token_for(user_id: Uuid) -> String {
    token_issued_at(user_id, "someone@example.com", Utc::now())
}
