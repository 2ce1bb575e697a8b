//! Tracking Module
//!
//! Data structures for a user's personal practice:
//!
//! - `Ritual` - a repeatable activity template owned by one user
//! - `Session` - one performance of a ritual, started then completed
//! - `MoodEntry` - a standalone mood check-in
//! - `HabitStack` - an ordered chain of the user's rituals
//!
//! Each type sits next to the request/response bodies of its endpoints.

pub mod ritual;
pub mod session;
pub mod mood;
pub mod stack;

pub use ritual::{
    CreateRitualRequest, ListRitualsResponse, Ritual, RitualResponse, UpdateRitualRequest,
    DEFAULT_CATEGORY,
};
pub use session::{
    CompleteSessionRequest, CompleteSessionResponse, ListSessionsResponse, Session,
    SessionResponse, StartSessionRequest,
};
pub use mood::{CreateMoodRequest, ListMoodResponse, MoodEntry, MoodResponse};
pub use stack::{CreateStackRequest, HabitStack, ListStacksResponse, StackResponse};
