//! Marketplace Data Structures
//!
//! Community rituals are templates published by one user that anyone can
//! adopt ("use") into their own rituals and rate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::tracking::{CreateRitualRequest, Ritual};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRitual {
    pub id: Uuid,
    pub author_id: Uuid,
    pub name: String,
    pub category: String,
    pub duration_minutes: i32,
    pub description: Option<String>,
    pub uses_count: i64,
    /// Running average in [1, 5]; 0 until the first rating
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl CommunityRitual {
    /// Publish a template built from the same fields as a personal ritual
    pub fn publish(author_id: Uuid, request: PublishRitualRequest) -> Result<Self, SharedError> {
        let template = request.into_ritual(author_id)?;
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            name: template.name,
            category: template.category,
            duration_minutes: template.duration_minutes,
            description: template.description,
            uses_count: 0,
            rating: 0.0,
            created_at: Utc::now(),
        })
    }

    /// Copy this template into a new ritual owned by `user_id`
    pub fn adopt(&self, user_id: Uuid) -> Ritual {
        Ritual::new(
            user_id,
            self.name.clone(),
            self.category.clone(),
            self.duration_minutes,
            self.description.clone(),
        )
    }
}

/// Body of `POST /marketplace`; the same fields as a personal ritual
pub type PublishRitualRequest = CreateRitualRequest;

/// Body of `POST /marketplace/rate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRitualRequest {
    pub ritual_id: Option<Uuid>,
    pub rating: Option<i32>,
}

/// Body of `POST /marketplace/use`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseRitualRequest {
    pub ritual_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRitualResponse {
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityRitualResponse {
    pub ritual: CommunityRitual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommunityRitualsResponse {
    pub rituals: Vec<CommunityRitual>,
}
