use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::SessionRepository;
use crate::backend::store::StoreResult;
use crate::shared::tracking::Session;

#[async_trait]
impl SessionRepository for PgStore {
    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, ritual_id, started_at, completed_at, mood_before, mood_after, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(session.ritual_id)
        .bind(session.started_at)
        .bind(session.completed_at)
        .bind(session.mood_before)
        .bind(session.mood_after)
        .bind(&session.notes)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_session(&self, id: Uuid) -> StoreResult<Option<Session>> {
        let row = sqlx::query("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::session).transpose()
    }

    async fn list_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>> {
        let found = sqlx::query("SELECT * FROM sessions WHERE user_id = $1 ORDER BY started_at DESC")
            .bind(user_id)
            .fetch_all(self.pool())
            .await?;
        rows::all(&found, rows::session)
    }

    async fn list_completed_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>> {
        let found = sqlx::query(
            r#"
            SELECT * FROM sessions
            WHERE user_id = $1 AND completed_at IS NOT NULL
            ORDER BY completed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        rows::all(&found, rows::session)
    }

    async fn update_session(&self, session: &Session) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET ritual_id = $2, completed_at = $3, mood_before = $4, mood_after = $5, notes = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id)
        .bind(session.ritual_id)
        .bind(session.completed_at)
        .bind(session.mood_before)
        .bind(session.mood_after)
        .bind(&session.notes)
        .execute(self.pool())
        .await?;
        expect_affected(result, "session")
    }

    async fn delete_session(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        expect_affected(result, "session")
    }
}
