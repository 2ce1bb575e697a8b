//! Community Module
//!
//! Data structures shared between users:
//!
//! - `Challenge` / `UserChallenge` - time-boxed challenges and enrollments
//! - `Circle` / `CircleMember` - small groups with an owner
//! - `CommunityRitual` - marketplace templates others can adopt and rate

pub mod challenge;
pub mod circle;
pub mod marketplace;

pub use challenge::{
    ChallengeEnrollment, ChallengeResponse, ChallengeStats, ChallengeStatus, CheckInOutcome,
    CheckInResponse, Challenge, CreateChallengeRequest, EnrollmentResponse, JoinChallengeRequest,
    ListChallengesResponse, MyChallengesResponse, UserChallenge,
};
pub use circle::{
    Circle, CircleMember, CircleResponse, CircleRole, CircleSummary, CreateCircleRequest,
    LeaveOutcome, ListCirclesResponse, MembershipResponse,
};
pub use marketplace::{
    CommunityRitual, CommunityRitualResponse, ListCommunityRitualsResponse,
    PublishRitualRequest, RateRitualRequest, RateRitualResponse, UseRitualRequest,
};
