//! Content moderation route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use ctu_core::ModerationStatus;

use crate::db::ModerationRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::ReportedContent;
use crate::state::AppState;

/// Query parameters for the moderation queue.
#[derive(Debug, Deserialize)]
pub struct ModerationQuery {
    pub status: Option<ModerationStatus>,
}

/// GET /moderation
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<ModerationQuery>,
) -> Result<Json<Vec<ReportedContent>>, AppError> {
    let repository = ModerationRepository::new(state.db());
    Ok(Json(repository.list(query.status).await))
}

/// POST /moderation/{id}/approve
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn approve(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<ReportedContent>, AppError> {
    let repository = ModerationRepository::new(state.db());
    let report = repository.decide(&id, true).await?;
    tracing::info!(report = %report.id, by = %admin.0.id, "reported content kept");
    Ok(Json(report))
}

/// POST /moderation/{id}/remove
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn remove(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<ReportedContent>, AppError> {
    let repository = ModerationRepository::new(state.db());
    let report = repository.decide(&id, false).await?;
    tracing::info!(report = %report.id, by = %admin.0.id, "reported content removed");
    Ok(Json(report))
}
