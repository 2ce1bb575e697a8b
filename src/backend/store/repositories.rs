//! Repository traits
//!
//! One trait per aggregate. `find_*` returns `Ok(None)` for a missing row;
//! `update_*`/`delete_*` return `StoreError::NotFound` instead.

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::StoreResult;
use crate::shared::community::{Challenge, Circle, CircleMember, CommunityRitual, UserChallenge};
use crate::shared::tracking::{HabitStack, MoodEntry, Ritual, Session};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Fails with `Conflict` if the email is taken.
    async fn create_user(&self, user: &User) -> StoreResult<()>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Lookup by normalized (lowercase) email
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Overwrite the gamification counters
    async fn update_user_progress(
        &self,
        id: Uuid,
        streak_count: i32,
        total_points: i64,
    ) -> StoreResult<()>;
}

#[async_trait]
pub trait RitualRepository: Send + Sync {
    async fn create_ritual(&self, ritual: &Ritual) -> StoreResult<()>;
    async fn find_ritual(&self, id: Uuid) -> StoreResult<Option<Ritual>>;
    /// Newest first
    async fn list_rituals(&self, user_id: Uuid) -> StoreResult<Vec<Ritual>>;
    async fn update_ritual(&self, ritual: &Ritual) -> StoreResult<()>;
    /// Detaches sessions and removes the id from every habit stack
    async fn delete_ritual(&self, id: Uuid) -> StoreResult<()>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create_session(&self, session: &Session) -> StoreResult<()>;
    async fn find_session(&self, id: Uuid) -> StoreResult<Option<Session>>;
    /// Most recently started first
    async fn list_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>>;
    /// Completed sessions only, most recently completed first
    async fn list_completed_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>>;
    async fn update_session(&self, session: &Session) -> StoreResult<()>;
    async fn delete_session(&self, id: Uuid) -> StoreResult<()>;
}

#[async_trait]
pub trait MoodRepository: Send + Sync {
    async fn create_mood_entry(&self, entry: &MoodEntry) -> StoreResult<()>;
    /// Newest first
    async fn list_mood_entries(&self, user_id: Uuid) -> StoreResult<Vec<MoodEntry>>;
}

#[async_trait]
pub trait ChallengeRepository: Send + Sync {
    async fn create_challenge(&self, challenge: &Challenge) -> StoreResult<()>;
    async fn find_challenge(&self, id: Uuid) -> StoreResult<Option<Challenge>>;
    async fn list_challenges(&self) -> StoreResult<Vec<Challenge>>;

    /// Insert an enrollment. Fails with `Conflict` if the user already has an
    /// active or completed enrollment in the same challenge.
    async fn create_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()>;

    /// The user's active or completed enrollment in a challenge, if any
    async fn find_open_enrollment(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> StoreResult<Option<UserChallenge>>;

    /// Every enrollment of a user, newest first
    async fn list_enrollments(&self, user_id: Uuid) -> StoreResult<Vec<UserChallenge>>;

    async fn update_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()>;
}

#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Insert a circle together with its owner's membership
    async fn create_circle(&self, circle: &Circle, owner: &CircleMember) -> StoreResult<()>;
    async fn find_circle(&self, id: Uuid) -> StoreResult<Option<Circle>>;
    /// Delete a circle and all of its memberships
    async fn delete_circle(&self, id: Uuid) -> StoreResult<()>;

    /// Circles the user belongs to, with the user's membership in each
    async fn list_circles_for_user(&self, user_id: Uuid)
        -> StoreResult<Vec<(Circle, CircleMember)>>;

    /// Fails with `Conflict` if the user is already a member
    async fn add_member(&self, member: &CircleMember) -> StoreResult<()>;
    async fn find_member(&self, circle_id: Uuid, user_id: Uuid)
        -> StoreResult<Option<CircleMember>>;
    async fn remove_member(&self, circle_id: Uuid, user_id: Uuid) -> StoreResult<()>;
    async fn count_members(&self, circle_id: Uuid) -> StoreResult<usize>;
}

#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    async fn create_community_ritual(&self, ritual: &CommunityRitual) -> StoreResult<()>;
    async fn find_community_ritual(&self, id: Uuid) -> StoreResult<Option<CommunityRitual>>;
    /// Most used first
    async fn list_community_rituals(&self) -> StoreResult<Vec<CommunityRitual>>;
    async fn update_community_rating(&self, id: Uuid, rating: f64) -> StoreResult<()>;
    /// Add one to the use count
    async fn increment_community_uses(&self, id: Uuid) -> StoreResult<()>;
}

#[async_trait]
pub trait HabitStackRepository: Send + Sync {
    async fn create_stack(&self, stack: &HabitStack) -> StoreResult<()>;
    async fn find_stack(&self, id: Uuid) -> StoreResult<Option<HabitStack>>;
    /// Newest first
    async fn list_stacks(&self, user_id: Uuid) -> StoreResult<Vec<HabitStack>>;
    async fn delete_stack(&self, id: Uuid) -> StoreResult<()>;
}

/// Everything the handlers need from persistence
pub trait Store:
    UserRepository
    + RitualRepository
    + SessionRepository
    + MoodRepository
    + ChallengeRepository
    + CircleRepository
    + MarketplaceRepository
    + HabitStackRepository
{
}

impl<T> Store for T where
    T: UserRepository
        + RitualRepository
        + SessionRepository
        + MoodRepository
        + ChallengeRepository
        + CircleRepository
        + MarketplaceRepository
        + HabitStackRepository
{
}
