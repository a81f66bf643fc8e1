//! Influencer dashboard route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ctu_core::{CollaborationId, CollaborationStatus};

use crate::db::{InfluencerRepository, RepositoryError};
use crate::error::AppError;
use crate::middleware::RequireInfluencer;
use crate::models::{
    Collaboration, InfluencerStats, ReferralAccount, StarTransaction, SupplierProfile,
};
use crate::state::AppState;

/// Query parameters for the collaboration list.
#[derive(Debug, Deserialize)]
pub struct CollaborationQuery {
    pub status: Option<CollaborationStatus>,
}

/// GET /influencer/collaborations
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn collaborations(
    State(state): State<AppState>,
    auth: RequireInfluencer,
    Query(query): Query<CollaborationQuery>,
) -> Result<Json<Vec<Collaboration>>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(
        repository.collaborations(&auth.0.id, query.status).await,
    ))
}

async fn respond(
    state: &AppState,
    auth: &RequireInfluencer,
    id: String,
    accept: bool,
) -> Result<Json<Collaboration>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    let collaboration = repository
        .respond_to_collaboration(&auth.0.id, &CollaborationId::new(id), accept)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(msg) => AppError::BadRequest(msg),
            RepositoryError::NotFound => AppError::NotFound("collaboration".into()),
        })?;
    Ok(Json(collaboration))
}

/// POST /influencer/collaborations/{id}/accept
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn accept_collaboration(
    State(state): State<AppState>,
    auth: RequireInfluencer,
    Path(id): Path<String>,
) -> Result<Json<Collaboration>, AppError> {
    respond(&state, &auth, id, true).await
}

/// POST /influencer/collaborations/{id}/decline
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn decline_collaboration(
    State(state): State<AppState>,
    auth: RequireInfluencer,
    Path(id): Path<String>,
) -> Result<Json<Collaboration>, AppError> {
    respond(&state, &auth, id, false).await
}

/// GET /influencer/referral
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn referral(
    State(state): State<AppState>,
    auth: RequireInfluencer,
) -> Result<Json<ReferralAccount>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(repository.referral(&auth.0.id).await?))
}

/// POST /influencer/referral/regenerate
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn regenerate_code(
    State(state): State<AppState>,
    auth: RequireInfluencer,
) -> Result<Json<ReferralAccount>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(repository.regenerate_referral_code(&auth.0.id).await?))
}

/// Star balance with ledger.
#[derive(Debug, Serialize)]
pub struct StarsResponse {
    pub balance: i64,
    pub ledger: Vec<StarTransaction>,
}

/// GET /influencer/stars
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn stars(
    State(state): State<AppState>,
    auth: RequireInfluencer,
) -> Result<Json<StarsResponse>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(StarsResponse {
        balance: repository.star_balance(&auth.0.id).await,
        ledger: repository.star_ledger(&auth.0.id).await,
    }))
}

/// Body for star redemption.
#[derive(Debug, Deserialize)]
pub struct RedeemBody {
    pub amount: u32,
    pub reason: String,
}

/// POST /influencer/stars/redeem
#[instrument(skip(state, auth, body), fields(influencer = %auth.0.id))]
pub async fn redeem_stars(
    State(state): State<AppState>,
    auth: RequireInfluencer,
    Json(body): Json<RedeemBody>,
) -> Result<Json<StarsResponse>, AppError> {
    if body.amount == 0 {
        return Err(AppError::BadRequest("amount must be positive".into()));
    }

    let repository = InfluencerRepository::new(state.db());
    repository
        .redeem_stars(&auth.0.id, body.amount, body.reason)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(msg) => AppError::BadRequest(msg),
            RepositoryError::NotFound => AppError::NotFound("star account".into()),
        })?;

    Ok(Json(StarsResponse {
        balance: repository.star_balance(&auth.0.id).await,
        ledger: repository.star_ledger(&auth.0.id).await,
    }))
}

/// Query parameters for supplier search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

/// GET /influencer/search
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn search(
    State(state): State<AppState>,
    auth: RequireInfluencer,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SupplierProfile>>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(
        repository
            .search_suppliers(query.q.as_deref(), query.category.as_deref(), query.verified)
            .await,
    ))
}

/// GET /influencer/stats
#[instrument(skip(state, auth), fields(influencer = %auth.0.id))]
pub async fn stats(
    State(state): State<AppState>,
    auth: RequireInfluencer,
) -> Result<Json<InfluencerStats>, AppError> {
    let repository = InfluencerRepository::new(state.db());
    Ok(Json(repository.stats(&auth.0.id).await))
}
