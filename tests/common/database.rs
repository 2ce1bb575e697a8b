//! Database test fixtures
//!
//! PostgreSQL tests run only when `DATABASE_URL` is set. Every test creates
//! its own users, so runs share one database without truncating it.

use ritualos::backend::auth::users::User;
use ritualos::backend::store::{PgStore, UserRepository};
use uuid::Uuid;

/// Connect to `DATABASE_URL` and migrate, or `None` when it is unset
pub async fn test_store() -> Option<PgStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        }
    };

    let store = PgStore::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    store.migrate().await.expect("Failed to run migrations");
    Some(store)
}

/// Insert a user with a unique email
pub async fn create_test_user(store: &PgStore) -> User {
    let email = format!("pg-{}@example.com", Uuid::new_v4().simple());
    let user = User::new(email, "Test User".to_string(), "not-a-real-hash".to_string());
    store.create_user(&user).await.expect("Failed to create user");
    user
}
