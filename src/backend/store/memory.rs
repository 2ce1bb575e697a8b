//! In-memory store
//!
//! Keeps every table in one `HashMap` each behind a single `RwLock`, so a
//! uniqueness check and the insert that follows it happen under one write
//! guard. Used when no `DATABASE_URL` is configured and by the test suite.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::repositories::{
    ChallengeRepository, CircleRepository, HabitStackRepository, MarketplaceRepository,
    MoodRepository, RitualRepository, SessionRepository, UserRepository,
};
use crate::backend::store::{StoreError, StoreResult};
use crate::shared::community::{Challenge, Circle, CircleMember, CommunityRitual, UserChallenge};
use crate::shared::tracking::{HabitStack, MoodEntry, Ritual, Session};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    rituals: HashMap<Uuid, Ritual>,
    sessions: HashMap<Uuid, Session>,
    mood_entries: HashMap<Uuid, MoodEntry>,
    challenges: HashMap<Uuid, Challenge>,
    enrollments: HashMap<Uuid, UserChallenge>,
    circles: HashMap<Uuid, Circle>,
    members: HashMap<(Uuid, Uuid), CircleMember>,
    community_rituals: HashMap<Uuid, CommunityRitual>,
    stacks: HashMap<Uuid, HabitStack>,
}

/// Thread-safe in-memory implementation of every repository
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Values sorted newest first by a timestamp key
fn newest_first<T: Clone, K: Ord>(values: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut values: Vec<T> = values.collect();
    values.sort_by(|a, b| key(b).cmp(&key(a)));
    values
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: &User) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("user"));
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_user_progress(
        &self,
        id: Uuid,
        streak_count: i32,
        total_points: i64,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound("user"))?;
        user.streak_count = streak_count;
        user.total_points = total_points;
        Ok(())
    }
}

#[async_trait]
impl RitualRepository for MemoryStore {
    async fn create_ritual(&self, ritual: &Ritual) -> StoreResult<()> {
        self.tables.write().await.rituals.insert(ritual.id, ritual.clone());
        Ok(())
    }

    async fn find_ritual(&self, id: Uuid) -> StoreResult<Option<Ritual>> {
        Ok(self.tables.read().await.rituals.get(&id).cloned())
    }

    async fn list_rituals(&self, user_id: Uuid) -> StoreResult<Vec<Ritual>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.rituals.values().filter(|r| r.user_id == user_id).cloned(),
            |r| r.created_at,
        ))
    }

    async fn update_ritual(&self, ritual: &Ritual) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .rituals
            .get_mut(&ritual.id)
            .ok_or(StoreError::NotFound("ritual"))?;
        *stored = ritual.clone();
        Ok(())
    }

    async fn delete_ritual(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.rituals.remove(&id).ok_or(StoreError::NotFound("ritual"))?;
        // Mirrors ON DELETE SET NULL on sessions.ritual_id
        for session in tables.sessions.values_mut() {
            if session.ritual_id == Some(id) {
                session.ritual_id = None;
            }
        }
        for stack in tables.stacks.values_mut() {
            stack.ritual_ids.retain(|ritual_id| *ritual_id != id);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create_session(&self, session: &Session) -> StoreResult<()> {
        self.tables.write().await.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn find_session(&self, id: Uuid) -> StoreResult<Option<Session>> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn list_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.sessions.values().filter(|s| s.user_id == user_id).cloned(),
            |s| s.started_at,
        ))
    }

    async fn list_completed_sessions(&self, user_id: Uuid) -> StoreResult<Vec<Session>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables
                .sessions
                .values()
                .filter(|s| s.user_id == user_id && s.completed_at.is_some())
                .cloned(),
            |s| s.completed_at,
        ))
    }

    async fn update_session(&self, session: &Session) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .sessions
            .get_mut(&session.id)
            .ok_or(StoreError::NotFound("session"))?;
        *stored = session.clone();
        Ok(())
    }

    async fn delete_session(&self, id: Uuid) -> StoreResult<()> {
        self.tables
            .write()
            .await
            .sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("session"))
    }
}

#[async_trait]
impl MoodRepository for MemoryStore {
    async fn create_mood_entry(&self, entry: &MoodEntry) -> StoreResult<()> {
        self.tables.write().await.mood_entries.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn list_mood_entries(&self, user_id: Uuid) -> StoreResult<Vec<MoodEntry>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.mood_entries.values().filter(|e| e.user_id == user_id).cloned(),
            |e| e.created_at,
        ))
    }
}

#[async_trait]
impl ChallengeRepository for MemoryStore {
    async fn create_challenge(&self, challenge: &Challenge) -> StoreResult<()> {
        self.tables.write().await.challenges.insert(challenge.id, challenge.clone());
        Ok(())
    }

    async fn find_challenge(&self, id: Uuid) -> StoreResult<Option<Challenge>> {
        Ok(self.tables.read().await.challenges.get(&id).cloned())
    }

    async fn list_challenges(&self) -> StoreResult<Vec<Challenge>> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.challenges.values().cloned(), |c| c.created_at))
    }

    async fn create_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let taken = tables.enrollments.values().any(|e| {
            e.user_id == enrollment.user_id
                && e.challenge_id == enrollment.challenge_id
                && e.status.blocks_rejoin()
        });
        if taken {
            return Err(StoreError::Conflict("enrollment"));
        }
        tables.enrollments.insert(enrollment.id, enrollment.clone());
        Ok(())
    }

    async fn find_open_enrollment(
        &self,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> StoreResult<Option<UserChallenge>> {
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .values()
            .find(|e| e.user_id == user_id && e.challenge_id == challenge_id && e.status.blocks_rejoin())
            .cloned())
    }

    async fn list_enrollments(&self, user_id: Uuid) -> StoreResult<Vec<UserChallenge>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.enrollments.values().filter(|e| e.user_id == user_id).cloned(),
            |e| e.joined_at,
        ))
    }

    async fn update_enrollment(&self, enrollment: &UserChallenge) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .enrollments
            .get_mut(&enrollment.id)
            .ok_or(StoreError::NotFound("enrollment"))?;
        *stored = enrollment.clone();
        Ok(())
    }
}

#[async_trait]
impl CircleRepository for MemoryStore {
    async fn create_circle(&self, circle: &Circle, owner: &CircleMember) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.circles.insert(circle.id, circle.clone());
        tables.members.insert((owner.circle_id, owner.user_id), owner.clone());
        Ok(())
    }

    async fn find_circle(&self, id: Uuid) -> StoreResult<Option<Circle>> {
        Ok(self.tables.read().await.circles.get(&id).cloned())
    }

    async fn delete_circle(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.circles.remove(&id).ok_or(StoreError::NotFound("circle"))?;
        tables.members.retain(|(circle_id, _), _| *circle_id != id);
        Ok(())
    }

    async fn list_circles_for_user(
        &self,
        user_id: Uuid,
    ) -> StoreResult<Vec<(Circle, CircleMember)>> {
        let tables = self.tables.read().await;
        let pairs = tables.members.values().filter(|m| m.user_id == user_id).filter_map(|m| {
            tables
                .circles
                .get(&m.circle_id)
                .map(|circle| (circle.clone(), m.clone()))
        });
        Ok(newest_first(pairs, |(_, m)| m.joined_at))
    }

    async fn add_member(&self, member: &CircleMember) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let key = (member.circle_id, member.user_id);
        if tables.members.contains_key(&key) {
            return Err(StoreError::Conflict("membership"));
        }
        tables.members.insert(key, member.clone());
        Ok(())
    }

    async fn find_member(
        &self,
        circle_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Option<CircleMember>> {
        Ok(self.tables.read().await.members.get(&(circle_id, user_id)).cloned())
    }

    async fn remove_member(&self, circle_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        self.tables
            .write()
            .await
            .members
            .remove(&(circle_id, user_id))
            .map(|_| ())
            .ok_or(StoreError::NotFound("membership"))
    }

    async fn count_members(&self, circle_id: Uuid) -> StoreResult<usize> {
        let tables = self.tables.read().await;
        Ok(tables.members.keys().filter(|(id, _)| *id == circle_id).count())
    }
}

#[async_trait]
impl MarketplaceRepository for MemoryStore {
    async fn create_community_ritual(&self, ritual: &CommunityRitual) -> StoreResult<()> {
        self.tables
            .write()
            .await
            .community_rituals
            .insert(ritual.id, ritual.clone());
        Ok(())
    }

    async fn find_community_ritual(&self, id: Uuid) -> StoreResult<Option<CommunityRitual>> {
        Ok(self.tables.read().await.community_rituals.get(&id).cloned())
    }

    async fn list_community_rituals(&self) -> StoreResult<Vec<CommunityRitual>> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.community_rituals.values().cloned(), |r| {
            (r.uses_count, r.created_at)
        }))
    }

    async fn update_community_rating(&self, id: Uuid, rating: f64) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let ritual = tables
            .community_rituals
            .get_mut(&id)
            .ok_or(StoreError::NotFound("community ritual"))?;
        ritual.rating = rating;
        Ok(())
    }

    async fn increment_community_uses(&self, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let ritual = tables
            .community_rituals
            .get_mut(&id)
            .ok_or(StoreError::NotFound("community ritual"))?;
        ritual.uses_count = ritual.uses_count.saturating_add(1);
        Ok(())
    }
}

#[async_trait]
impl HabitStackRepository for MemoryStore {
    async fn create_stack(&self, stack: &HabitStack) -> StoreResult<()> {
        self.tables.write().await.stacks.insert(stack.id, stack.clone());
        Ok(())
    }

    async fn find_stack(&self, id: Uuid) -> StoreResult<Option<HabitStack>> {
        Ok(self.tables.read().await.stacks.get(&id).cloned())
    }

    async fn list_stacks(&self, user_id: Uuid) -> StoreResult<Vec<HabitStack>> {
        let tables = self.tables.read().await;
        Ok(newest_first(
            tables.stacks.values().filter(|s| s.user_id == user_id).cloned(),
            |s| s.created_at,
        ))
    }

    async fn delete_stack(&self, id: Uuid) -> StoreResult<()> {
        self.tables
            .write()
            .await
            .stacks
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("habit stack"))
    }
}
