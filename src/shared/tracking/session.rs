//! Session Data Structure
//!
//! A session is one performance of a ritual. It is created when the user
//! starts and is completed exactly once; after that it never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::accounting::StreakSummary;
use crate::shared::error::SharedError;
use crate::shared::validation::{optional_mood, optional_text};

/// One performance of a ritual
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ritual_id: Option<Uuid>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub mood_before: Option<i32>,
    pub mood_after: Option<i32>,
    pub notes: Option<String>,
}

impl Session {
    /// Start a new session now
    pub fn start(user_id: Uuid, ritual_id: Option<Uuid>, mood_before: Option<i32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            ritual_id,
            started_at: Utc::now(),
            completed_at: None,
            mood_before,
            mood_after: None,
            notes: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Mark the session complete at `at`.
    ///
    /// Fails if the session was already completed.
    pub fn complete(
        &mut self,
        at: DateTime<Utc>,
        mood_after: Option<i32>,
        notes: Option<String>,
    ) -> Result<(), SharedError> {
        if self.is_completed() {
            return Err(SharedError::validation("session", "session is already completed"));
        }
        self.completed_at = Some(at);
        self.mood_after = mood_after;
        self.notes = notes;
        Ok(())
    }
}

/// Body of `POST /sessions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub ritual_id: Option<Uuid>,
    pub mood_before: Option<i32>,
}

impl StartSessionRequest {
    pub fn into_session(self, user_id: Uuid) -> Result<Session, SharedError> {
        let mood_before = optional_mood("moodBefore", self.mood_before)?;
        Ok(Session::start(user_id, self.ritual_id, mood_before))
    }
}

/// Body of `POST /sessions/{id}/complete`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSessionRequest {
    pub mood_after: Option<i32>,
    pub notes: Option<String>,
}

impl CompleteSessionRequest {
    /// Validate and apply to `session`
    pub fn apply(self, session: &mut Session, at: DateTime<Utc>) -> Result<(), SharedError> {
        let mood_after = optional_mood("moodAfter", self.mood_after)?;
        session.complete(at, mood_after, optional_text(self.notes))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: Session,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteSessionResponse {
    pub session: Session,
    pub streak: StreakSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSessionsResponse {
    pub sessions: Vec<Session>,
}
