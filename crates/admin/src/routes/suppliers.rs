//! Supplier account route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use ctu_core::{SupplierId, SupplierStatus};

use crate::db::{SupplierFilter, SupplierRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::SupplierAccount;
use crate::state::AppState;

/// Query parameters for the supplier list.
#[derive(Debug, Deserialize)]
pub struct SupplierQuery {
    pub q: Option<String>,
    pub status: Option<SupplierStatus>,
    pub verified: Option<bool>,
}

impl From<SupplierQuery> for SupplierFilter {
    fn from(query: SupplierQuery) -> Self {
        Self {
            query: query.q,
            status: query.status,
            verified: query.verified,
        }
    }
}

/// GET /suppliers
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<SupplierQuery>,
) -> Result<Json<Vec<SupplierAccount>>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(repository.list(&query.into()).await))
}

/// GET /suppliers/{id}
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn show(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SupplierAccount>, AppError> {
    let repository = SupplierRepository::new(state.db());
    Ok(Json(repository.get(&SupplierId::new(id)).await?))
}

/// POST /suppliers/{id}/suspend
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn suspend(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SupplierAccount>, AppError> {
    let repository = SupplierRepository::new(state.db());
    let supplier = repository.suspend(&SupplierId::new(id)).await?;
    tracing::info!(supplier = %supplier.id, by = %admin.0.id, "supplier suspended");
    Ok(Json(supplier))
}

/// POST /suppliers/{id}/reactivate
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn reactivate(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SupplierAccount>, AppError> {
    let repository = SupplierRepository::new(state.db());
    let supplier = repository.reactivate(&SupplierId::new(id)).await?;
    tracing::info!(supplier = %supplier.id, by = %admin.0.id, "supplier reactivated");
    Ok(Json(supplier))
}
