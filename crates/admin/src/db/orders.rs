//! Repository for platform-wide order data.

use rust_decimal::Decimal;

use ctu_core::{OrderId, OrderStatus};

use super::{MockDb, RepositoryError};
use crate::models::AdminOrder;

/// Client-side filters for the order list: text search, status equality,
/// and a minimum-total threshold.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive match over order number, supplier, and customer.
    pub query: Option<String>,
    pub status: Option<OrderStatus>,
    pub min_total: Option<Decimal>,
}

impl OrderFilter {
    fn matches(&self, order: &AdminOrder) -> bool {
        let text_ok = self.query.as_deref().is_none_or(|q| {
            let q = q.to_lowercase();
            order.number.to_lowercase().contains(&q)
                || order.supplier_name.to_lowercase().contains(&q)
                || order.customer_name.to_lowercase().contains(&q)
        });
        let status_ok = self.status.is_none_or(|s| order.status == s);
        let total_ok = self.min_total.is_none_or(|min| order.total.amount >= min);
        text_ok && status_ok && total_ok
    }
}

/// Repository for order operations.
pub struct OrderRepository<'a> {
    db: &'a MockDb,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Orders matching the filter, newest first.
    pub async fn list(&self, filter: &OrderFilter) -> Vec<AdminOrder> {
        let mut orders: Vec<AdminOrder> = self
            .db
            .orders
            .read()
            .await
            .iter()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    /// A single order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown order.
    pub async fn get(&self, id: &OrderId) -> Result<AdminOrder, RepositoryError> {
        self.db
            .orders
            .read()
            .await
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_filter_matches_supplier_and_number() {
        let db = MockDb::seeded();
        let repository = OrderRepository::new(&db);

        let by_supplier = repository
            .list(&OrderFilter {
                query: Some("lefort".to_owned()),
                ..OrderFilter::default()
            })
            .await;
        assert!(!by_supplier.is_empty());
        assert!(
            by_supplier
                .iter()
                .all(|o| o.supplier_name.contains("Lefort"))
        );

        let by_number = repository
            .list(&OrderFilter {
                query: Some("0160".to_owned()),
                ..OrderFilter::default()
            })
            .await;
        assert_eq!(by_number.len(), 1);
    }

    #[tokio::test]
    async fn test_status_and_threshold_filters() {
        let db = MockDb::seeded();
        let repository = OrderRepository::new(&db);

        let processing = repository
            .list(&OrderFilter {
                status: Some(OrderStatus::Processing),
                ..OrderFilter::default()
            })
            .await;
        assert!(processing.iter().all(|o| o.status == OrderStatus::Processing));

        let big = repository
            .list(&OrderFilter {
                min_total: Some(Decimal::new(10_000, 0)),
                ..OrderFilter::default()
            })
            .await;
        assert!(big.iter().all(|o| o.total.amount >= Decimal::new(10_000, 0)));
        assert!(!big.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_order() {
        let db = MockDb::seeded();
        let repository = OrderRepository::new(&db);
        let err = repository
            .get(&OrderId::new("ord-nope"))
            .await
            .expect_err("unknown");
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
