//! Dashboard route handler.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use ctu_core::{OrderStatus, Price, SupplierStatus};

use crate::db::{AlertRepository, OrderFilter, OrderRepository, SupplierFilter, SupplierRepository};
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::models::AdminOrder;
use crate::state::AppState;

/// Metric tiles shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub orders: usize,
    pub revenue: String,
    pub active_suppliers: usize,
    pub unread_alerts: usize,
}

/// Recent order row for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct RecentOrderView {
    pub number: String,
    pub supplier_name: String,
    pub customer_name: String,
    pub total: String,
    pub status: String,
}

impl From<&AdminOrder> for RecentOrderView {
    fn from(order: &AdminOrder) -> Self {
        Self {
            number: order.number.clone(),
            supplier_name: order.supplier_name.clone(),
            customer_name: order.customer_name.clone(),
            total: order.total.display(),
            status: order.status.to_string(),
        }
    }
}

/// Dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub recent_orders: Vec<RecentOrderView>,
}

/// GET /dashboard
#[instrument(skip(state, admin), fields(admin = %admin.0.id))]
pub async fn show(
    State(state): State<AppState>,
    admin: RequireAdmin,
) -> Result<Json<DashboardResponse>, AppError> {
    let orders = OrderRepository::new(state.db());
    let suppliers = SupplierRepository::new(state.db());
    let alerts = AlertRepository::new(state.db());

    let all_orders = orders.list(&OrderFilter::default()).await;
    let revenue: Decimal = all_orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total.amount)
        .sum();
    let active_suppliers = suppliers
        .list(&SupplierFilter {
            status: Some(SupplierStatus::Active),
            ..SupplierFilter::default()
        })
        .await
        .len();

    let recent_orders = all_orders.iter().take(5).map(RecentOrderView::from).collect();

    Ok(Json(DashboardResponse {
        metrics: DashboardMetrics {
            orders: all_orders.len(),
            revenue: Price::eur(revenue).display(),
            active_suppliers,
            unread_alerts: alerts.unread_count().await,
        },
        recent_orders,
    }))
}
