//! Habit Stack Data Structure
//!
//! A habit stack chains several of a user's rituals in a fixed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{required, required_text};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitStack {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub ritual_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /stacks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStackRequest {
    pub name: Option<String>,
    pub ritual_ids: Option<Vec<Uuid>>,
}

impl CreateStackRequest {
    /// Validate the body. Ritual ownership is checked by the handler.
    pub fn into_stack(self, user_id: Uuid) -> Result<HabitStack, SharedError> {
        let name = required_text("name", self.name)?;
        let ritual_ids = required("ritualIds", self.ritual_ids)?;
        if ritual_ids.is_empty() {
            return Err(SharedError::validation(
                "ritualIds",
                "ritualIds must contain at least one ritual",
            ));
        }
        Ok(HabitStack {
            id: Uuid::new_v4(),
            user_id,
            name,
            ritual_ids,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackResponse {
    pub stack: HabitStack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStacksResponse {
    pub stacks: Vec<HabitStack>,
}
