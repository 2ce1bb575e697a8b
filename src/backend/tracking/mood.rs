//! Mood handlers

use axum::{extract::State, Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody};
use crate::backend::store::StoreHandle;
use crate::shared::tracking::{CreateMoodRequest, ListMoodResponse, MoodResponse};

pub async fn list_mood(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListMoodResponse>, BackendError> {
    let entries = store.list_mood_entries(user.user_id).await?;
    Ok(Json(ListMoodResponse { entries }))
}

/// `POST /mood`; answers 200 rather than 201
pub async fn log_mood(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateMoodRequest>,
) -> Result<Json<MoodResponse>, BackendError> {
    let entry = request.into_entry(user.user_id)?;
    store.create_mood_entry(&entry).await?;
    tracing::info!("Mood {} logged by {}", entry.mood, user.user_id);
    Ok(Json(MoodResponse { entry }))
}
