//! Marketplace handlers
//!
//! Rating is a lossy running average over the use count. Using a template
//! increments its use count, then copies it into the caller's rituals; the
//! two writes are independent.

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody};
use crate::backend::store::StoreHandle;
use crate::shared::accounting::{updated_rating, RATING_MAX, RATING_MIN};
use crate::shared::community::{
    CommunityRitual, CommunityRitualResponse, ListCommunityRitualsResponse, PublishRitualRequest,
    RateRitualRequest, RateRitualResponse, UseRitualRequest,
};
use crate::shared::tracking::RitualResponse;
use crate::shared::validation::{in_range, required};

/// `GET /marketplace`, public
pub async fn list_marketplace(
    State(store): State<StoreHandle>,
) -> Result<Json<ListCommunityRitualsResponse>, BackendError> {
    let rituals = store.list_community_rituals().await?;
    Ok(Json(ListCommunityRitualsResponse { rituals }))
}

pub async fn publish_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<PublishRitualRequest>,
) -> Result<(StatusCode, Json<CommunityRitualResponse>), BackendError> {
    let ritual = CommunityRitual::publish(user.user_id, request)?;
    store.create_community_ritual(&ritual).await?;
    tracing::info!("Community ritual {} published by {}", ritual.id, user.user_id);
    Ok((StatusCode::CREATED, Json(CommunityRitualResponse { ritual })))
}

/// `POST /marketplace/rate`
pub async fn rate_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<RateRitualRequest>,
) -> Result<Json<RateRitualResponse>, BackendError> {
    let ritual_id = required("ritualId", request.ritual_id)?;
    let submitted = in_range(
        "rating",
        required("rating", request.rating)?,
        RATING_MIN,
        RATING_MAX,
    )?;

    let ritual = store
        .find_community_ritual(ritual_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Ritual not found"))?;
    let rating = updated_rating(ritual.rating, ritual.uses_count, submitted)?;
    store.update_community_rating(ritual.id, rating).await?;

    tracing::info!("User {} rated {} ({} -> {:.2})", user.user_id, ritual.id, submitted, rating);
    Ok(Json(RateRitualResponse { rating }))
}

/// `POST /marketplace/use`: adopt a template as one of the caller's rituals
pub async fn use_ritual(
    State(store): State<StoreHandle>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<UseRitualRequest>,
) -> Result<(StatusCode, Json<RitualResponse>), BackendError> {
    let ritual_id = required("ritualId", request.ritual_id)?;
    let template = store
        .find_community_ritual(ritual_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Ritual not found"))?;

    store.increment_community_uses(template.id).await?;
    let ritual = template.adopt(user.user_id);
    store.create_ritual(&ritual).await?;

    tracing::info!("User {} adopted community ritual {}", user.user_id, template.id);
    Ok((StatusCode::CREATED, Json(RitualResponse { ritual })))
}
