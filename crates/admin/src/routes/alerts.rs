//! Platform alert route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use ctu_core::{AlertId, AlertSeverity};

use crate::db::AlertRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::PlatformAlert;
use crate::state::AppState;

/// Query parameters for the alert list.
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub min_severity: Option<AlertSeverity>,
}

/// Alert list payload with the unread badge count.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub unread: usize,
    pub alerts: Vec<PlatformAlert>,
}

/// GET /alerts
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<AlertQuery>,
) -> Result<Json<AlertsResponse>, AppError> {
    let repository = AlertRepository::new(state.db());
    Ok(Json(AlertsResponse {
        unread: repository.unread_count().await,
        alerts: repository.list(query.min_severity).await,
    }))
}

/// POST /alerts/{id}/read
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn mark_read(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<PlatformAlert>, AppError> {
    let repository = AlertRepository::new(state.db());
    Ok(Json(repository.mark_read(&AlertId::new(id)).await?))
}
