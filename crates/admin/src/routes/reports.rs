//! Reports route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::ReportsRepository;
use crate::db::reports::{MonthlyReport, TopSupplier};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Reports payload.
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub monthly: Vec<MonthlyReport>,
    pub top_suppliers: Vec<TopSupplier>,
}

/// GET /reports
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn show(
    State(state): State<AppState>,
    admin: RequireAdmin,
) -> Result<Json<ReportsResponse>, AppError> {
    let repository = ReportsRepository::new(state.db());
    Ok(Json(ReportsResponse {
        monthly: repository.monthly().await,
        top_suppliers: repository.top_suppliers(5).await,
    }))
}
