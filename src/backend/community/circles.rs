//! Circle handlers
//!
//! Leaving follows `LeaveOutcome`: the last member leaving deletes the
//! circle, and an owner cannot leave while others remain.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathId};
use crate::backend::store::{StoreError, StoreHandle};
use crate::shared::community::{
    CircleMember, CircleResponse, CircleRole, CircleSummary, CreateCircleRequest, LeaveOutcome,
    ListCirclesResponse, MembershipResponse,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCircleResponse {
    pub left: bool,
    pub circle_deleted: bool,
}

/// `GET /circles`: circles the caller belongs to
pub async fn list_circles(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListCirclesResponse>, BackendError> {
    let memberships = store.list_circles_for_user(user.user_id).await?;
    let mut circles = Vec::with_capacity(memberships.len());
    for (circle, member) in memberships {
        let member_count = store.count_members(circle.id).await?;
        circles.push(CircleSummary {
            circle,
            role: member.role,
            member_count,
        });
    }
    Ok(Json(ListCirclesResponse { circles }))
}

pub async fn create_circle(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateCircleRequest>,
) -> Result<(StatusCode, Json<CircleResponse>), BackendError> {
    let (circle, owner) = request.into_circle(user.user_id)?;
    store.create_circle(&circle, &owner).await?;
    tracing::info!("Circle {} created by {}", circle.id, user.user_id);
    Ok((StatusCode::CREATED, Json(CircleResponse { circle })))
}

pub async fn join_circle(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(circle_id): PathId,
) -> Result<(StatusCode, Json<MembershipResponse>), BackendError> {
    store
        .find_circle(circle_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Circle not found"))?;

    let membership = CircleMember::new(circle_id, user.user_id, CircleRole::Member);
    store.add_member(&membership).await.map_err(|e| match e {
        StoreError::Conflict(_) => BackendError::conflict("Already a member of this circle"),
        other => other.into(),
    })?;

    tracing::info!("User {} joined circle {}", user.user_id, circle_id);
    Ok((StatusCode::CREATED, Json(MembershipResponse { membership })))
}

pub async fn leave_circle(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(circle_id): PathId,
) -> Result<Json<LeaveCircleResponse>, BackendError> {
    store
        .find_circle(circle_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Circle not found"))?;
    let member = store
        .find_member(circle_id, user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Not a member of this circle"))?;
    let member_count = store.count_members(circle_id).await?;

    let circle_deleted = match LeaveOutcome::decide(&member, member_count)? {
        LeaveOutcome::RemoveMember => {
            store.remove_member(circle_id, user.user_id).await?;
            false
        }
        LeaveOutcome::DeleteCircle => {
            store.delete_circle(circle_id).await?;
            true
        }
    };

    tracing::info!(
        "User {} left circle {}{}",
        user.user_id,
        circle_id,
        if circle_deleted { " (circle deleted)" } else { "" }
    );
    Ok(Json(LeaveCircleResponse {
        left: true,
        circle_deleted,
    }))
}
