//! Ritual handlers
//!
//! - `GET /rituals` - the caller's rituals, newest first
//! - `POST /rituals` - create
//! - `GET|PUT|DELETE /rituals/{id}` - read, partial update, delete

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::owned_by;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathId};
use crate::backend::store::StoreHandle;
use crate::shared::tracking::{
    CreateRitualRequest, ListRitualsResponse, RitualResponse, UpdateRitualRequest,
};

pub async fn list_rituals(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListRitualsResponse>, BackendError> {
    let rituals = store.list_rituals(user.user_id).await?;
    Ok(Json(ListRitualsResponse { rituals }))
}

pub async fn create_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateRitualRequest>,
) -> Result<(StatusCode, Json<RitualResponse>), BackendError> {
    let ritual = request.into_ritual(user.user_id)?;
    store.create_ritual(&ritual).await?;
    tracing::info!("Ritual {} created by {}", ritual.id, user.user_id);
    Ok((StatusCode::CREATED, Json(RitualResponse { ritual })))
}

pub async fn get_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
) -> Result<Json<RitualResponse>, BackendError> {
    let ritual = owned_by(store.find_ritual(id).await?, user.user_id, "Ritual")?;
    Ok(Json(RitualResponse { ritual }))
}

pub async fn update_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
    JsonBody(request): JsonBody<UpdateRitualRequest>,
) -> Result<Json<RitualResponse>, BackendError> {
    let mut ritual = owned_by(store.find_ritual(id).await?, user.user_id, "Ritual")?;
    request.apply(&mut ritual)?;
    store.update_ritual(&ritual).await?;
    tracing::info!("Ritual {} updated", ritual.id);
    Ok(Json(RitualResponse { ritual }))
}

pub async fn delete_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    PathId(id): PathId,
) -> Result<Json<Value>, BackendError> {
    let ritual = owned_by(store.find_ritual(id).await?, user.user_id, "Ritual")?;
    store.delete_ritual(ritual.id).await?;
    tracing::info!("Ritual {} deleted", ritual.id);
    Ok(Json(json!({ "deleted": true })))
}
