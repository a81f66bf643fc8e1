//! Order list and detail route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use ctu_core::{OrderId, OrderStatus};

use crate::db::{OrderFilter, OrderRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::AdminOrder;
use crate::state::AppState;

/// Query parameters for the order list.
#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub q: Option<String>,
    pub status: Option<OrderStatus>,
    pub min_total: Option<Decimal>,
}

impl From<OrderQuery> for OrderFilter {
    fn from(query: OrderQuery) -> Self {
        Self {
            query: query.q,
            status: query.status,
            min_total: query.min_total,
        }
    }
}

/// GET /orders
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn list(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(query): Query<OrderQuery>,
) -> Result<Json<Vec<AdminOrder>>, AppError> {
    let repository = OrderRepository::new(state.db());
    Ok(Json(repository.list(&query.into()).await))
}

/// GET /orders/{id}
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn show(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<AdminOrder>, AppError> {
    let repository = OrderRepository::new(state.db());
    Ok(Json(repository.get(&OrderId::new(id)).await?))
}
