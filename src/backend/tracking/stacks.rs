//! Habit stack handlers
//!
//! Every ritual in a stack must belong to the caller.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::owned_by;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathId};
use crate::backend::store::StoreHandle;
use crate::shared::tracking::{CreateStackRequest, ListStacksResponse, StackResponse};

pub async fn list_stacks(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListStacksResponse>, BackendError> {
    let stacks = store.list_stacks(user.user_id).await?;
    Ok(Json(ListStacksResponse { stacks }))
}

pub async fn create_stack(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateStackRequest>,
) -> Result<(StatusCode, Json<StackResponse>), BackendError> {
    let stack = request.into_stack(user.user_id)?;
    for ritual_id in &stack.ritual_ids {
        owned_by(store.find_ritual(*ritual_id).await?, user.user_id, "Ritual")?;
    }
    store.create_stack(&stack).await?;
    tracing::info!("Habit stack {} created with {} rituals", stack.id, stack.ritual_ids.len());
    Ok((StatusCode::CREATED, Json(StackResponse { stack })))
}

pub async fn delete_stack(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
) -> Result<Json<Value>, BackendError> {
    let stack = owned_by(store.find_stack(id).await?, user.user_id, "Habit stack")?;
    store.delete_stack(stack.id).await?;
    Ok(Json(json!({ "deleted": true })))
}
