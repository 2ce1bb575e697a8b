//! Personal Tracking Handlers
//!
//! HTTP handlers for the records a user owns outright: rituals, sessions,
//! mood entries, habit stacks, and the stats derived from them.
//!
//! Every handler here takes `AuthUser`. Records are always re-fetched and
//! their owner compared against the caller; another user's record is
//! reported as 404, the same as a missing one.

pub mod rituals;
pub mod sessions;
pub mod mood;
pub mod stacks;
pub mod stats;

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::tracking::{HabitStack, Ritual, Session};

/// A record with a single owning user
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for Ritual {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for Session {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for HabitStack {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// The record if it exists and belongs to `user_id`, otherwise 404 "`label` not found"
pub fn owned_by<T: Owned>(record: Option<T>, user_id: Uuid, label: &str) -> Result<T, BackendError> {
    match record {
        Some(record) if record.owner_id() == user_id => Ok(record),
        Some(_) => {
            tracing::warn!("{} owned by another user requested by {}", label, user_id);
            Err(BackendError::not_found(format!("{} not found", label)))
        }
        None => Err(BackendError::not_found(format!("{} not found", label))),
    }
}
