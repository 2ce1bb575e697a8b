//! Mood Entry Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{in_range, optional_text, required, MOOD_MAX, MOOD_MIN};

/// A standalone mood check-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: i32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /mood`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    pub mood: Option<i32>,
    pub note: Option<String>,
}

impl CreateMoodRequest {
    pub fn into_entry(self, user_id: Uuid) -> Result<MoodEntry, SharedError> {
        let mood = in_range("mood", required("mood", self.mood)?, MOOD_MIN, MOOD_MAX)?;
        Ok(MoodEntry {
            id: Uuid::new_v4(),
            user_id,
            mood,
            note: optional_text(self.note),
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodResponse {
    pub entry: MoodEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMoodResponse {
    pub entries: Vec<MoodEntry>,
}
