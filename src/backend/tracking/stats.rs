//! `GET /stats`

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::StoreHandle;
use crate::shared::accounting::StreakSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub current_streak: u32,
    /// `max(current, stored streak counter)`, not a historical scan
    pub longest_streak: u32,
    pub total_points: i64,
    pub level: i32,
    pub completed_sessions: usize,
}

pub async fn get_stats(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<StatsResponse>, BackendError> {
    let account = store
        .find_user_by_id(user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    let completed = store.list_completed_sessions(user.user_id).await?;

    let streak = StreakSummary::compute(
        completed.iter().map(|s| s.completed_at),
        &Utc::now(),
        u32::try_from(account.streak_count).unwrap_or_default(),
    );

    Ok(Json(StatsResponse {
        current_streak: streak.current,
        longest_streak: streak.longest,
        total_points: account.total_points,
        level: account.level,
        completed_sessions: completed.len(),
    }))
}
