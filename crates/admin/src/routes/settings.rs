//! Settings route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::instrument;

use crate::db::SettingsRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Query parameters for the settings list.
#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    /// Key prefix to list (default: all platform settings).
    pub prefix: Option<String>,
}

/// GET /settings
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<SettingsQuery>,
) -> Result<Json<Vec<(String, JsonValue)>>, AppError> {
    let repository = SettingsRepository::new(state.db());
    let prefix = query.prefix.unwrap_or_else(|| "platform:".to_owned());
    Ok(Json(repository.get_settings_by_prefix(&prefix).await))
}

/// PUT /settings/{key}
#[instrument(skip(state, admin, value), fields(admin = %admin.0.id))]
pub async fn set(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(key): Path<String>,
    Json(value): Json<JsonValue>,
) -> Result<Json<JsonValue>, AppError> {
    let repository = SettingsRepository::new(state.db());
    repository.set_setting(&key, value.clone()).await;
    tracing::info!(%key, by = %admin.0.id, "setting updated");
    Ok(Json(value))
}
