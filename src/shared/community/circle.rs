//! Circle Data Structures
//!
//! A circle is a small group that shares progress. The creator is its owner;
//! everyone else joins as a member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{optional_text, required_text};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CircleRole {
    Owner,
    Member,
}

impl CircleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CircleRole::Owner => "owner",
            CircleRole::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(CircleRole::Owner),
            "member" => Some(CircleRole::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CircleMember {
    pub circle_id: Uuid,
    pub user_id: Uuid,
    pub role: CircleRole,
    pub joined_at: DateTime<Utc>,
}

impl CircleMember {
    pub fn new(circle_id: Uuid, user_id: Uuid, role: CircleRole) -> Self {
        Self {
            circle_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }
}

/// What leaving a circle should do to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Remove this membership only
    RemoveMember,
    /// The leaver was the last member: delete the circle
    DeleteCircle,
}

impl LeaveOutcome {
    /// Decide how `member` leaves a circle that currently has `member_count` members.
    ///
    /// An owner cannot leave while anyone else is still in the circle.
    pub fn decide(member: &CircleMember, member_count: usize) -> Result<Self, SharedError> {
        if member_count <= 1 {
            return Ok(LeaveOutcome::DeleteCircle);
        }
        if member.role == CircleRole::Owner {
            return Err(SharedError::validation(
                "circle",
                "the owner cannot leave a circle that still has other members",
            ));
        }
        Ok(LeaveOutcome::RemoveMember)
    }
}

/// Body of `POST /circles`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCircleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateCircleRequest {
    /// Build the circle and its owner membership
    pub fn into_circle(self, owner_id: Uuid) -> Result<(Circle, CircleMember), SharedError> {
        let circle = Circle {
            id: Uuid::new_v4(),
            name: required_text("name", self.name)?,
            description: optional_text(self.description),
            owner_id,
            created_at: Utc::now(),
        };
        let owner = CircleMember::new(circle.id, owner_id, CircleRole::Owner);
        Ok((circle, owner))
    }
}

/// A circle as seen by one of its members
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleSummary {
    #[serde(flatten)]
    pub circle: Circle,
    pub role: CircleRole,
    pub member_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleResponse {
    pub circle: Circle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCirclesResponse {
    pub circles: Vec<CircleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub membership: CircleMember,
}
