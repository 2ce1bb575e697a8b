//! Challenge Data Structures
//!
//! A `Challenge` is a shared definition ("meditate for 7 days, 50 points").
//! A `UserChallenge` is one user's enrollment in it. Each daily check-in
//! advances the enrollment; reaching the challenge's duration completes it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{in_range, required, required_text};

/// Lifecycle of an enrollment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    #[default]
    Active,
    Completed,
    Abandoned,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Abandoned => "abandoned",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ChallengeStatus::Active),
            "completed" => Some(ChallengeStatus::Completed),
            "abandoned" => Some(ChallengeStatus::Abandoned),
            _ => None,
        }
    }

    /// Active and completed enrollments block joining the same challenge again
    pub fn blocks_rejoin(&self) -> bool {
        matches!(self, ChallengeStatus::Active | ChallengeStatus::Completed)
    }
}

/// A challenge definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_days: i32,
    pub points: i32,
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A user's enrollment in a challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserChallenge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub challenge_id: Uuid,
    pub status: ChallengeStatus,
    pub streak: i32,
    pub completed_days: i32,
    pub joined_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub last_check_in: Option<NaiveDate>,
}

/// What a check-in did to an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Progress recorded, challenge still running
    Progressed,
    /// This check-in reached the challenge duration
    Completed,
}

impl UserChallenge {
    /// Enroll `user_id` in `challenge_id`
    pub fn enroll(user_id: Uuid, challenge_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            challenge_id,
            status: ChallengeStatus::Active,
            streak: 0,
            completed_days: 0,
            joined_at: Utc::now(),
            completed_at: None,
            last_check_in: None,
        }
    }

    /// Record one day of progress.
    ///
    /// Only active enrollments accept check-ins, and only once per day. The
    /// streak continues when yesterday was checked in, otherwise it restarts.
    pub fn check_in(
        &mut self,
        challenge: &Challenge,
        now: DateTime<Utc>,
    ) -> Result<CheckInOutcome, SharedError> {
        if self.status != ChallengeStatus::Active {
            return Err(SharedError::validation(
                "status",
                format!("challenge is {}", self.status.as_str()),
            ));
        }
        let today = now.date_naive();
        if self.last_check_in == Some(today) {
            return Err(SharedError::validation(
                "checkIn",
                "already checked in today",
            ));
        }

        let continues = self.last_check_in.is_some() && self.last_check_in == today.pred_opt();
        self.streak = if continues { self.streak + 1 } else { 1 };
        self.completed_days += 1;
        self.last_check_in = Some(today);

        if self.completed_days >= challenge.duration_days {
            self.status = ChallengeStatus::Completed;
            self.completed_at = Some(now);
            Ok(CheckInOutcome::Completed)
        } else {
            Ok(CheckInOutcome::Progressed)
        }
    }

    /// Give up on an active enrollment. Abandoned is terminal.
    pub fn abandon(&mut self) -> Result<(), SharedError> {
        if self.status != ChallengeStatus::Active {
            return Err(SharedError::validation(
                "status",
                format!("challenge is {}", self.status.as_str()),
            ));
        }
        self.status = ChallengeStatus::Abandoned;
        Ok(())
    }
}

/// Body of `POST /challenges`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<i32>,
    pub points: Option<i32>,
}

impl CreateChallengeRequest {
    pub fn into_challenge(self, creator_id: Uuid) -> Result<Challenge, SharedError> {
        let title = required_text("title", self.title)?;
        let description = required_text("description", self.description)?;
        let duration_days = in_range("durationDays", required("durationDays", self.duration_days)?, 1, 365)?;
        let points = in_range("points", self.points.unwrap_or(0), 0, 10_000)?;

        Ok(Challenge {
            id: Uuid::new_v4(),
            title,
            description,
            duration_days,
            points,
            creator_id: Some(creator_id),
            created_at: Utc::now(),
        })
    }
}

/// Body of `POST /challenges/join`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinChallengeRequest {
    pub challenge_id: Option<Uuid>,
}

/// An enrollment with the challenge it refers to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeEnrollment {
    #[serde(flatten)]
    pub enrollment: UserChallenge,
    pub challenge: Option<Challenge>,
}

/// Aggregate figures for `GET /challenges/my`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    pub active_count: usize,
    pub completed_count: usize,
    pub total_points: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyChallengesResponse {
    pub active: Vec<ChallengeEnrollment>,
    pub completed: Vec<ChallengeEnrollment>,
    pub stats: ChallengeStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: Challenge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListChallengesResponse {
    pub challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub enrollment: UserChallenge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResponse {
    pub enrollment: UserChallenge,
    pub points_awarded: i32,
}
