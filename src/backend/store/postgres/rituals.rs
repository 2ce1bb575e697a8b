use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::RitualRepository;
use crate::backend::store::StoreResult;
use crate::shared::tracking::Ritual;

#[async_trait]
impl RitualRepository for PgStore {
    async fn create_ritual(&self, ritual: &Ritual) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO rituals (id, user_id, name, category, duration_minutes, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(ritual.id)
        .bind(ritual.user_id)
        .bind(&ritual.name)
        .bind(&ritual.category)
        .bind(ritual.duration_minutes)
        .bind(&ritual.description)
        .bind(ritual.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_ritual(&self, id: Uuid) -> StoreResult<Option<Ritual>> {
        let row = sqlx::query("SELECT * FROM rituals WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::ritual).transpose()
    }

    async fn list_rituals(&self, user_id: Uuid) -> StoreResult<Vec<Ritual>> {
        let found = sqlx::query("SELECT * FROM rituals WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(self.pool())
            .await?;
        rows::all(&found, rows::ritual)
    }

    async fn update_ritual(&self, ritual: &Ritual) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE rituals
            SET name = $2, category = $3, duration_minutes = $4, description = $5
            WHERE id = $1
            "#,
        )
        .bind(ritual.id)
        .bind(&ritual.name)
        .bind(&ritual.category)
        .bind(ritual.duration_minutes)
        .bind(&ritual.description)
        .execute(self.pool())
        .await?;
        expect_affected(result, "ritual")
    }

    /// Sessions keep their row with `ritual_id` nulled by the foreign key;
    /// stacks lose the id from `ritual_ids` in the same transaction.
    async fn delete_ritual(&self, id: Uuid) -> StoreResult<()> {
        let mut tx = self.pool().begin().await?;
        let result = sqlx::query("DELETE FROM rituals WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        expect_affected(result, "ritual")?;
        sqlx::query(
            r#"
            UPDATE habit_stacks
            SET ritual_ids = array_remove(ritual_ids, $1)
            WHERE $1 = ANY(ritual_ids)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }
}
