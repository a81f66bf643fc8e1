//! Dataset overview route handler.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::StatsRepository;
use crate::db::stats::CollectionStats;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /database
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn show(
    State(state): State<AppState>,
    admin: RequireAdmin,
) -> Result<Json<Vec<CollectionStats>>, AppError> {
    let repository = StatsRepository::new(state.db());
    Ok(Json(repository.collections().await))
}
