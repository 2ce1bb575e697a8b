use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::ChallengeRepository;
use crate::backend::store::{StoreError, StoreResult};
use crate::shared::community::{Challenge, UserChallenge};

#[async_trait]
impl ChallengeRepository for PgStore {
    async fn create_challenge(&self, challenge: &Challenge) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO challenges (id, title, description, duration_days, points, creator_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(challenge.id)
        .bind(&challenge.title)
        .bind(&challenge.description)
        .bind(challenge.duration_days)
        .bind(challenge.points)
        .bind(challenge.creator_id)
        .bind(challenge.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_challenge(&self, id: Uuid) -> StoreResult<Option<Challenge>> {
        let row = sqlx::query("SELECT * FROM challenges WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::challenge).transpose()
    }

    async fn list_challenges(&self) -> StoreResult<Vec<Challenge>> {
        let found = sqlx::query("SELECT * FROM challenges ORDER BY created_at DESC")
            .fetch_all(self.pool())
            .await?;
        rows::all(&found, rows::challenge)
    }

    async fn create_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()> {
        // The partial unique index on (user_id, challenge_id) rejects a second open enrollment
        sqlx::query(
            r#"
            INSERT INTO user_challenges
                (id, user_id, challenge_id, status, streak, completed_days, joined_at, completed_at, last_check_in)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(enrollment.id)
        .bind(enrollment.user_id)
        .bind(enrollment.challenge_id)
        .bind(enrollment.status.as_str())
        .bind(enrollment.streak)
        .bind(enrollment.completed_days)
        .bind(enrollment.joined_at)
        .bind(enrollment.completed_at)
        .bind(enrollment.last_check_in)
        .execute(self.pool())
        .await
        .map_err(|e| StoreError::from_write("enrollment", e))?;
        Ok(())
    }

    async fn find_open_enrollment(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> StoreResult<Option<UserChallenge>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM user_challenges
            WHERE user_id = $1 AND challenge_id = $2 AND status IN ('active', 'completed')
            "#,
        )
        .bind(user_id)
        .bind(challenge_id)
        .fetch_optional(self.pool())
        .await?;
        row.as_ref().map(rows::enrollment).transpose()
    }

    async fn list_enrollments(&self, user_id: Uuid) -> StoreResult<Vec<UserChallenge>> {
        let found =
            sqlx::query("SELECT * FROM user_challenges WHERE user_id = $1 ORDER BY joined_at DESC")
                .bind(user_id)
                .fetch_all(self.pool())
                .await?;
        rows::all(&found, rows::enrollment)
    }

    async fn update_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE user_challenges
            SET status = $2, streak = $3, completed_days = $4, completed_at = $5, last_check_in = $6
            WHERE id = $1
            "#,
        )
        .bind(enrollment.id)
        .bind(enrollment.status.as_str())
        .bind(enrollment.streak)
        .bind(enrollment.completed_days)
        .bind(enrollment.completed_at)
        .bind(enrollment.last_check_in)
        .execute(self.pool())
        .await?;
        expect_affected(result, "enrollment")
    }
}
