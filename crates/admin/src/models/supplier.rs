//! Supplier accounts as managed by platform operators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ctu_core::{Email, SupplierId, SupplierStatus};

/// A supplier account row in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierAccount {
    pub id: SupplierId,
    pub company_name: String,
    pub email: Email,
    pub country: String,
    /// Whether the platform has verified the supplier's documents.
    pub verified: bool,
    pub status: SupplierStatus,
    /// Average review rating, 0.0-5.0.
    pub rating: f32,
    /// Number of published product lines.
    pub products: u32,
    pub joined_at: DateTime<Utc>,
}
