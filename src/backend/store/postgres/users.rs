use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, PgStore};
use crate::backend::auth::users::User;
use crate::backend::store::repositories::UserRepository;
use crate::backend::store::{StoreError, StoreResult};

const USER_COLUMNS: &str =
    "id, email, name, password_hash, streak_count, total_points, level, created_at";

#[async_trait]
impl UserRepository for PgStore {
    async fn create_user(&self, user: &User) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, streak_count, total_points, level, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.streak_count)
        .bind(user.total_points)
        .bind(user.level)
        .bind(user.created_at)
        .execute(self.pool())
        .await
        .map_err(|e| StoreError::from_write("user", e))?;
        Ok(())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(self.pool())
        .await?;
        Ok(user)
    }

    async fn update_user_progress(
        &self,
        id: Uuid,
        streak_count: i32,
        total_points: i64,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE users SET streak_count = $2, total_points = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(streak_count)
        .bind(total_points)
        .execute(self.pool())
        .await?;
        expect_affected(result, "user")
    }
}
