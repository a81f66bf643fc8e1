//! Revenue and activity reports derived from the order data.
//!
//! Cancelled orders are excluded from revenue figures.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use ctu_core::{CurrencyCode, OrderStatus, Price, SupplierId};

use super::MockDb;

/// One month of platform activity.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub orders: usize,
    pub revenue: Price,
}

/// A supplier ranked by revenue.
#[derive(Debug, Clone, Serialize)]
pub struct TopSupplier {
    pub supplier_id: SupplierId,
    pub company_name: String,
    pub orders: usize,
    pub revenue: Price,
}

/// Repository computing report aggregates.
pub struct ReportsRepository<'a> {
    db: &'a MockDb,
}

impl<'a> ReportsRepository<'a> {
    /// Create a new reports repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Orders and revenue per month, oldest first.
    pub async fn monthly(&self) -> Vec<MonthlyReport> {
        let orders = self.db.orders.read().await;
        let mut months: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
            let month = order.placed_at.format("%Y-%m").to_string();
            let entry = months.entry(month).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += order.total.amount;
        }

        months
            .into_iter()
            .map(|(month, (orders, revenue))| MonthlyReport {
                month,
                orders,
                revenue: Price::new(revenue, CurrencyCode::EUR),
            })
            .collect()
    }

    /// Suppliers ranked by revenue, highest first.
    pub async fn top_suppliers(&self, limit: usize) -> Vec<TopSupplier> {
        let orders = self.db.orders.read().await;
        let mut by_supplier: BTreeMap<SupplierId, (String, usize, Decimal)> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
            let entry = by_supplier
                .entry(order.supplier_id.clone())
                .or_insert_with(|| (order.supplier_name.clone(), 0, Decimal::ZERO));
            entry.1 += 1;
            entry.2 += order.total.amount;
        }

        let mut ranked: Vec<TopSupplier> = by_supplier
            .into_iter()
            .map(|(supplier_id, (company_name, orders, revenue))| TopSupplier {
                supplier_id,
                company_name,
                orders,
                revenue: Price::new(revenue, CurrencyCode::EUR),
            })
            .collect();
        ranked.sort_by(|a, b| b.revenue.amount.cmp(&a.revenue.amount));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_monthly_excludes_cancelled() {
        let db = MockDb::seeded();
        let repository = ReportsRepository::new(&db);
        let monthly = repository.monthly().await;

        // Seed orders span June and July 2025; the cancelled July order is
        // not counted.
        let july = monthly
            .iter()
            .find(|m| m.month == "2025-07")
            .expect("july report");
        assert_eq!(july.orders, 2);

        let total_orders: usize = monthly.iter().map(|m| m.orders).sum();
        assert_eq!(total_orders, 4);
    }

    #[tokio::test]
    async fn test_top_suppliers_ranked_by_revenue() {
        let db = MockDb::seeded();
        let repository = ReportsRepository::new(&db);
        let top = repository.top_suppliers(2).await;
        assert_eq!(top.len(), 2);
        assert!(top[0].revenue.amount >= top[1].revenue.amount);
        assert_eq!(top[0].company_name, "Shenzhen LED Manufacture");
    }
}
