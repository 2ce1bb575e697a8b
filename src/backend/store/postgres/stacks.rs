use async_trait::async_trait;
use uuid::Uuid;

use super::{expect_affected, rows, PgStore};
use crate::backend::store::repositories::HabitStackRepository;
use crate::backend::store::StoreResult;
use crate::shared::tracking::HabitStack;

#[async_trait]
impl HabitStackRepository for PgStore {
    async fn create_stack(&self, stack: &HabitStack) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO habit_stacks (id, user_id, name, ritual_ids, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(stack.id)
        .bind(stack.user_id)
        .bind(&stack.name)
        .bind(&stack.ritual_ids)
        .bind(stack.created_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_stack(&self, id: Uuid) -> StoreResult<Option<HabitStack>> {
        let row = sqlx::query("SELECT * FROM habit_stacks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        row.as_ref().map(rows::habit_stack).transpose()
    }

    async fn list_stacks(&self, user_id: Uuid) -> StoreResult<Vec<HabitStack>> {
        let found =
            sqlx::query("SELECT * FROM habit_stacks WHERE user_id = $1 ORDER BY created_at DESC")
                .bind(user_id)
                .fetch_all(self.pool())
                .await?;
        rows::all(&found, rows::habit_stack)
    }

    async fn delete_stack(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM habit_stacks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        expect_affected(result, "habit stack")
    }
}
