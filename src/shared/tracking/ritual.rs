//! Ritual Data Structure
//!
//! A ritual (sometimes called a loop) is a user-defined activity template:
//! a name, a category and an intended duration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{in_range, optional_text, required, required_text};

/// Category used when a request leaves it out
pub const DEFAULT_CATEGORY: &str = "general";

/// Longest ritual we accept, one full day
const MAX_DURATION_MINUTES: i32 = 24 * 60;

/// A ritual template owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ritual {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Ritual {
    /// Create a new ritual for `user_id`
    pub fn new(
        user_id: Uuid,
        name: String,
        category: String,
        duration_minutes: i32,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            category,
            duration_minutes,
            description,
            created_at: Utc::now(),
        }
    }
}

fn duration(value: i32) -> Result<i32, SharedError> {
    in_range("durationMinutes", value, 1, MAX_DURATION_MINUTES)
}

/// Body of `POST /rituals`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRitualRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

impl CreateRitualRequest {
    /// Validate the body and build the ritual it describes
    pub fn into_ritual(self, user_id: Uuid) -> Result<Ritual, SharedError> {
        let name = required_text("name", self.name)?;
        let duration_minutes = duration(required("durationMinutes", self.duration_minutes)?)?;
        let category =
            optional_text(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Ritual::new(
            user_id,
            name,
            category,
            duration_minutes,
            optional_text(self.description),
        ))
    }
}

/// Body of `PUT /rituals/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRitualRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
}

impl UpdateRitualRequest {
    /// Apply the present fields to `ritual`, validating each one
    pub fn apply(self, ritual: &mut Ritual) -> Result<(), SharedError> {
        if self.name.is_some() {
            ritual.name = required_text("name", self.name)?;
        }
        if self.category.is_some() {
            ritual.category = required_text("category", self.category)?;
        }
        if let Some(minutes) = self.duration_minutes {
            ritual.duration_minutes = duration(minutes)?;
        }
        if self.description.is_some() {
            ritual.description = optional_text(self.description);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RitualResponse {
    pub ritual: Ritual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRitualsResponse {
    pub rituals: Vec<Ritual>,
}
