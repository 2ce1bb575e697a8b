use async_trait::async_trait;
use uuid::Uuid;

use super::{rows, PgStore};
use crate::backend::store::repositories::MoodRepository;
use crate::backend::store::StoreResult;
use crate::shared::tracking::MoodEntry;

#[async_trait]
impl MoodRepository for PgStore {
    async fn create_mood_entry(&self, entry: &MoodEntry) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO mood_entries (id, user_id, mood, note, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.mood)
        .bind(&entry.note)
        .bind(entry.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn list_mood_entries(&self, user_id: Uuid) -> StoreResult<Vec<MoodEntry>> {
        let found =
            sqlx::query("SELECT * FROM mood_entries WHERE user_id = $1 ORDER BY created_at DESC")
                .bind(user_id)
                .fetch_all(self.pool())
                .await?;
        rows::all(&found, rows::mood_entry)
    }
}
