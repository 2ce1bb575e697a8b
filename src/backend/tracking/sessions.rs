//! Session handlers
//!
//! A session is started, then completed exactly once. Completing one
//! recomputes the caller's streak from all completed sessions and stores
//! the current value on the user record.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

use super::owned_by;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, OptionalJsonBody, PathId};
use crate::backend::store::StoreHandle;
use crate::shared::accounting::StreakSummary;
use crate::shared::tracking::{
    CompleteSessionRequest, CompleteSessionResponse, ListSessionsResponse, SessionResponse,
    StartSessionRequest,
};

pub async fn list_sessions(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListSessionsResponse>, BackendError> {
    let sessions = store.list_sessions(user.user_id).await?;
    Ok(Json(ListSessionsResponse { sessions }))
}

/// `POST /sessions`; a referenced ritual must belong to the caller
pub async fn start_session(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), BackendError> {
    let session = request.into_session(user.user_id)?;
    if let Some(ritual_id) = session.ritual_id {
        owned_by(store.find_ritual(ritual_id).await?, user.user_id, "Ritual")?;
    }
    store.create_session(&session).await?;
    tracing::info!("Session {} started by {}", session.id, user.user_id);
    Ok((StatusCode::CREATED, Json(SessionResponse { session })))
}

/// `POST /sessions/{id}/complete`; the body is optional
pub async fn complete_session(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
    OptionalJsonBody(request): OptionalJsonBody<CompleteSessionRequest>,
) -> Result<Json<CompleteSessionResponse>, BackendError> {
    let mut session = owned_by(store.find_session(id).await?, user.user_id, "Session")?;
    let now = Utc::now();
    request.apply(&mut session, now)?;
    store.update_session(&session).await?;

    let account = store
        .find_user_by_id(user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;
    let completed = store.list_completed_sessions(user.user_id).await?;
    let streak = StreakSummary::compute(
        completed.iter().map(|s| s.completed_at),
        &now,
        u32::try_from(account.streak_count).unwrap_or_default(),
    );
    store
        .update_user_progress(
            user.user_id,
            i32::try_from(streak.current).unwrap_or(i32::MAX),
            account.total_points,
        )
        .await?;

    tracing::info!(
        "Session {} completed; streak {} (longest {})",
        session.id,
        streak.current,
        streak.longest
    );
    Ok(Json(CompleteSessionResponse { session, streak }))
}

pub async fn delete_session(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
) -> Result<Json<Value>, BackendError> {
    let session = owned_by(store.find_session(id).await?, user.user_id, "Session")?;
    store.delete_session(session.id).await?;
    Ok(Json(json!({ "deleted": true })))
}
