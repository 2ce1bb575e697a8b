//! Row mapping for the shared model types

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::backend::store::{StoreError, StoreResult};
use crate::shared::community::{
    Challenge, ChallengeStatus, Circle, CircleMember, CircleRole, CommunityRitual, UserChallenge,
};
use crate::shared::tracking::{HabitStack, MoodEntry, Ritual, Session};

pub(super) fn ritual(row: &PgRow) -> StoreResult<Ritual> {
    Ok(Ritual {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        duration_minutes: row.try_get("duration_minutes")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(super) fn session(row: &PgRow) -> StoreResult<Session> {
    Ok(Session {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        ritual_id: row.try_get("ritual_id")?,
        started_at: row.try_get("started_at")?,
        completed_at: row.try_get("completed_at")?,
        mood_before: row.try_get("mood_before")?,
        mood_after: row.try_get("mood_after")?,
        notes: row.try_get("notes")?,
    })
}

pub(super) fn mood_entry(row: &PgRow) -> StoreResult<MoodEntry> {
    Ok(MoodEntry {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        mood: row.try_get("mood")?,
        note: row.try_get("note")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(super) fn challenge(row: &PgRow) -> StoreResult<Challenge> {
    Ok(Challenge {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        duration_days: row.try_get("duration_days")?,
        points: row.try_get("points")?,
        creator_id: row.try_get("creator_id")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(super) fn enrollment(row: &PgRow) -> StoreResult<UserChallenge> {
    let status: String = row.try_get("status")?;
    let status = ChallengeStatus::from_str(&status).ok_or_else(|| StoreError::Corrupt {
        entity: "enrollment",
        detail: format!("unknown status {:?}", status),
    })?;
    Ok(UserChallenge {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        challenge_id: row.try_get("challenge_id")?,
        status,
        streak: row.try_get("streak")?,
        completed_days: row.try_get("completed_days")?,
        joined_at: row.try_get("joined_at")?,
        completed_at: row.try_get("completed_at")?,
        last_check_in: row.try_get("last_check_in")?,
    })
}

/// Circle columns selected under their own name
pub(super) fn circle(row: &PgRow) -> StoreResult<Circle> {
    Ok(Circle {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        owner_id: row.try_get("owner_id")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(super) fn member(row: &PgRow) -> StoreResult<CircleMember> {
    let role: String = row.try_get("role")?;
    let role = CircleRole::from_str(&role).ok_or_else(|| StoreError::Corrupt {
        entity: "membership",
        detail: format!("unknown role {:?}", role),
    })?;
    Ok(CircleMember {
        circle_id: row.try_get("circle_id")?,
        user_id: row.try_get("user_id")?,
        role,
        joined_at: row.try_get("joined_at")?,
    })
}

pub(super) fn community_ritual(row: &PgRow) -> StoreResult<CommunityRitual> {
    Ok(CommunityRitual {
        id: row.try_get("id")?,
        author_id: row.try_get("author_id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        duration_minutes: row.try_get("duration_minutes")?,
        description: row.try_get("description")?,
        uses_count: row.try_get("uses_count")?,
        rating: row.try_get("rating")?,
        created_at: row.try_get("created_at")?,
    })
}

pub(super) fn habit_stack(row: &PgRow) -> StoreResult<HabitStack> {
    Ok(HabitStack {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        ritual_ids: row.try_get("ritual_ids")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Map every row, stopping at the first failure
pub(super) fn all<T>(rows: &[PgRow], map: fn(&PgRow) -> StoreResult<T>) -> StoreResult<Vec<T>> {
    rows.iter().map(map).collect()
}
