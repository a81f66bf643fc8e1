//! Platform-wide order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ctu_core::{OrderId, OrderStatus, Price, SupplierId};

/// An order as seen by platform operators (across all suppliers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: OrderId,
    /// Human-facing order number (e.g., "CTU-2025-0114").
    pub number: String,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub customer_name: String,
    pub total: Price,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}
