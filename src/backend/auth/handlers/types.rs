/**
 * Authentication Handler Types
 *
 * Request and response types used by the signup, login and me handlers.
 * Required fields are `Option`s so a missing one is reported by name.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    pub email: Option<String>,
    /// At least `MIN_PASSWORD_LEN` characters; hashed before storage
    pub password: Option<String>,
    /// Display name, defaults to the local part of the email
    pub name: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by signup and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Bearer token, valid for seven days
    pub token: String,
    pub user: UserResponse,
}

/// Returned by GET /auth/me
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub streak_count: i32,
    pub total_points: i64,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            streak_count: user.streak_count,
            total_points: user.total_points,
            level: user.level,
            created_at: user.created_at,
        }
    }
}
