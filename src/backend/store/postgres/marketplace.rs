use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::MarketplaceRepository;
use crate::backend::store::StoreResult;
use crate::shared::community::CommunityRitual;

#[async_trait]
impl MarketplaceRepository for PgStore {
    async fn create_community_ritual(&self, ritual: &CommunityRitual) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO community_rituals
                (id, author_id, name, category, duration_minutes, description, uses_count, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(ritual.id)
        .bind(ritual.author_id)
        .bind(&ritual.name)
        .bind(&ritual.category)
        .bind(ritual.duration_minutes)
        .bind(&ritual.description)
        .bind(ritual.uses_count)
        .bind(ritual.rating)
        .bind(ritual.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_community_ritual(&self, id: Uuid) -> StoreResult<Option<CommunityRitual>> {
        let row = sqlx::query("SELECT * FROM community_rituals WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::community_ritual).transpose()
    }

    async fn list_community_rituals(&self) -> StoreResult<Vec<CommunityRitual>> {
        let found = sqlx::query(
            "SELECT * FROM community_rituals ORDER BY uses_count DESC, created_at DESC",
        )
        .fetch_all(self.pool())
        .await?;
        rows::all(&found, rows::community_ritual)
    }

    async fn update_community_rating(&self, id: Uuid, rating: f64) -> StoreResult<()> {
        let result = sqlx::query("UPDATE community_rituals SET rating = $2 WHERE id = $1")
            .bind(id)
            .bind(rating)
            .execute(self.pool())
            .await?;
        expect_affected(result, "community ritual")
    }

    async fn increment_community_uses(&self, id: Uuid) -> StoreResult<()> {
        let result =
            sqlx::query("UPDATE community_rituals SET uses_count = uses_count + 1 WHERE id = $1")
                .bind(id)
                .execute(self.pool())
                .await?;
        expect_affected(result, "community ritual")
    }
}
