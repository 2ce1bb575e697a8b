//! Challenge handlers
//!
//! Completing a challenge (the check-in that reaches its duration) awards
//! its points to the user. The enrollment update and the points update are
//! separate writes.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathId};
use crate::backend::store::{StoreError, StoreHandle};
use crate::shared::accounting::award_points;
use crate::shared::community::{
    ChallengeEnrollment, ChallengeResponse, ChallengeStats, ChallengeStatus, CheckInOutcome,
    CheckInResponse, CreateChallengeRequest, EnrollmentResponse, JoinChallengeRequest,
    ListChallengesResponse, MyChallengesResponse, UserChallenge,
};
use crate::shared::validation::required;

const ALREADY_JOINED: &str = "Already joined this challenge";

/// `GET /challenges`, public
pub async fn list_challenges(
    State(store): State<StoreHandle>,
) -> Result<Json<ListChallengesResponse>, BackendError> {
    let challenges = store.list_challenges().await?;
    Ok(Json(ListChallengesResponse { challenges }))
}

pub async fn create_challenge(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateChallengeRequest>,
) -> Result<(StatusCode, Json<ChallengeResponse>), BackendError> {
    let challenge = request.into_challenge(user.user_id)?;
    store.create_challenge(&challenge).await?;
    tracing::info!("Challenge {} created by {}", challenge.id, user.user_id);
    Ok((StatusCode::CREATED, Json(ChallengeResponse { challenge })))
}

/// `POST /challenges/join`
///
/// At most one active or completed enrollment per user and challenge; an
/// abandoned one does not block joining again.
pub async fn join_challenge(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<JoinChallengeRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), BackendError> {
    let challenge_id = required("challengeId", request.challenge_id)?;
    store
        .find_challenge(challenge_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Challenge not found"))?;

    if store
        .find_open_enrollment(user.user_id, challenge_id)
        .await?
        .is_some()
    {
        tracing::warn!("User {} already joined challenge {}", user.user_id, challenge_id);
        return Err(BackendError::validation("challengeId", ALREADY_JOINED));
    }

    let enrollment = UserChallenge::enroll(user.user_id, challenge_id);
    store.create_enrollment(&enrollment).await.map_err(|e| match e {
        StoreError::Conflict(_) => BackendError::validation("challengeId", ALREADY_JOINED),
        other => other.into(),
    })?;

    tracing::info!("User {} joined challenge {}", user.user_id, challenge_id);
    Ok((StatusCode::CREATED, Json(EnrollmentResponse { enrollment })))
}

/// `GET /challenges/my`: active and completed enrollments with their challenge
pub async fn my_challenges(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<MyChallengesResponse>, BackendError> {
    let enrollments = store.list_enrollments(user.user_id).await?;

    let mut active = Vec::new();
    let mut completed = Vec::new();
    let mut total_points: i64 = 0;
    for enrollment in enrollments {
        let challenge = store.find_challenge(enrollment.challenge_id).await?;
        match enrollment.status {
            ChallengeStatus::Active => active.push(ChallengeEnrollment { enrollment, challenge }),
            ChallengeStatus::Completed => {
                if let Some(challenge) = &challenge {
                    total_points = award_points(total_points, challenge.points);
                }
                completed.push(ChallengeEnrollment { enrollment, challenge });
            }
            ChallengeStatus::Abandoned => {}
        }
    }

    let stats = ChallengeStats {
        active_count: active.len(),
        completed_count: completed.len(),
        total_points,
    };
    Ok(Json(MyChallengesResponse {
        active,
        completed,
        stats,
    }))
}

/// `POST /challenges/{id}/checkin`
pub async fn check_in(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(challenge_id): PathId,
) -> Result<Json<CheckInResponse>, BackendError> {
    let challenge = store
        .find_challenge(challenge_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Challenge not found"))?;
    let mut enrollment = store
        .find_open_enrollment(user.user_id, challenge_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Not enrolled in this challenge"))?;

    let outcome = enrollment.check_in(&challenge, Utc::now())?;
    store.update_enrollment(&enrollment).await?;

    let points_awarded = match outcome {
        CheckInOutcome::Progressed => 0,
        CheckInOutcome::Completed => {
            let account = store
                .find_user_by_id(user.user_id)
                .await?
                .ok_or_else(|| BackendError::not_found("User not found"))?;
            store
                .update_user_progress(
                    user.user_id,
                    account.streak_count,
                    award_points(account.total_points, challenge.points),
                )
                .await?;
            tracing::info!(
                "User {} completed challenge {} (+{} points)",
                user.user_id,
                challenge.id,
                challenge.points
            );
            challenge.points.max(0)
        }
    };

    Ok(Json(CheckInResponse {
        enrollment,
        points_awarded,
    }))
}

/// `POST /challenges/{id}/abandon`: only active enrollments can be abandoned
pub async fn abandon_challenge(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(challenge_id): PathId,
) -> Result<Json<EnrollmentResponse>, BackendError> {
    let mut enrollment = store
        .find_open_enrollment(user.user_id, challenge_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Not enrolled in this challenge"))?;
    enrollment.abandon()?;
    store.update_enrollment(&enrollment).await?;
    tracing::info!("User {} abandoned challenge {}", user.user_id, challenge_id);
    Ok(Json(EnrollmentResponse { enrollment }))
}
