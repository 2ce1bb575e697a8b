/**
 * User Model
 *
 * The stored user record, including the password hash. Responses use
 * `UserResponse` from `handlers::types`, which has no hash field.
 */

use chrono::{DateTime, Utc};

/// Level every account starts at
pub const STARTING_LEVEL: i32 = 1;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Normalized (lowercase) email, unique
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Stored streak counter, refreshed on every session completion
    pub streak_count: i32,
    pub total_points: i64,
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            email,
            name,
            password_hash,
            streak_count: 0,
            total_points: 0,
            level: STARTING_LEVEL,
            created_at: Utc::now(),
        }
    }
}

/// Lowercase and trim an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic shape check: something before and after a single '@'
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}
