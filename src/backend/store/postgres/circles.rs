use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::CircleRepository;
use crate::backend::store::{StoreError, StoreResult};
use crate::shared::community::{Circle, CircleMember};

#[async_trait]
impl CircleRepository for PgStore {
    async fn create_circle(&self, circle: &Circle, owner: &CircleMember) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO circles (id, name, description, owner_id, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(circle.id)
        .bind(&circle.name)
        .bind(&circle.description)
        .bind(circle.owner_id)
        .bind(circle.created_at)
        .execute(self.pool())
        .await?;
        self.add_member(owner).await
    }

    async fn find_circle(&self, id: Uuid) -> StoreResult<Option<Circle>> {
        let row = sqlx::query("SELECT * FROM circles WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::circle).transpose()
    }

    async fn delete_circle(&self, id: Uuid) -> StoreResult<()> {
        // circle_members rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM circles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        expect_affected(result, "circle")
    }

    async fn list_circles_for_user(
        &self,
        user_id: Uuid,
    ) -> StoreResult<Vec<(Circle, CircleMember)>> {
        let found = sqlx::query(
            r#"
            SELECT c.id, c.name, c.description, c.owner_id, c.created_at,
                   m.circle_id, m.user_id, m.role, m.joined_at
            FROM circles c
            JOIN circle_members m ON m.circle_id = c.id
            WHERE m.user_id = $1
            ORDER BY m.joined_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        found
            .iter()
            .map(|row| Ok((rows::circle(row)?, rows::member(row)?)))
            .collect()
    }

    async fn add_member(&self, member: &CircleMember) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO circle_members (circle_id, user_id, role, joined_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(member.circle_id)
        .bind(member.user_id)
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .execute(self.pool())
        .await
        .map_err(|e| StoreError::from_write("membership", e))?;
        Ok(())
    }

    async fn find_member(
        &self,
        circle_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<CircleMember>> {
        let row = sqlx::query("SELECT * FROM circle_members WHERE circle_id = $1 AND user_id = $2")
            .bind(circle_id)
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::member).transpose()
    }

    async fn remove_member(&self, circle_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM circle_members WHERE circle_id = $1 AND user_id = $2")
            .bind(circle_id)
            .bind(user_id)
            .execute(self.pool())
            .await?;
        expect_affected(result, "membership")
    }

    async fn count_members(&self, circle_id: Uuid) -> StoreResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM circle_members WHERE circle_id = $1")
            .bind(circle_id)
            .fetch_one(self.pool())
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}
