//! Dataset overview for the database page.

use serde::Serialize;

use super::MockDb;

/// Row count and approximate serialized size of one collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    pub name: &'static str,
    pub rows: usize,
    /// Approximate size of the collection serialized as JSON, in bytes.
    pub approx_bytes: usize,
}

/// Repository computing the dataset overview.
pub struct StatsRepository<'a> {
    db: &'a MockDb,
}

impl<'a> StatsRepository<'a> {
    /// Create a new stats repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Per-collection stats, in a fixed display order.
    pub async fn collections(&self) -> Vec<CollectionStats> {
        fn measure<T: Serialize>(name: &'static str, rows: &[T]) -> CollectionStats {
            CollectionStats {
                name,
                rows: rows.len(),
                approx_bytes: serde_json::to_string(rows).map_or(0, |s| s.len()),
            }
        }

        let orders = self.db.orders.read().await;
        let suppliers = self.db.suppliers.read().await;
        let documents = self.db.documents.read().await;
        let moderation = self.db.moderation.read().await;
        let alerts = self.db.alerts.read().await;
        let settings = self.db.settings.read().await;

        vec![
            measure("orders", &orders),
            measure("suppliers", &suppliers),
            measure("documents", &documents),
            measure("moderation", &moderation),
            measure("alerts", &alerts),
            CollectionStats {
                name: "settings",
                rows: settings.len(),
                approx_bytes: serde_json::to_string(&*settings).map_or(0, |s| s.len()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_match_seed() {
        let db = MockDb::seeded();
        let repository = StatsRepository::new(&db);
        let collections = repository.collections().await;

        let orders = collections
            .iter()
            .find(|c| c.name == "orders")
            .expect("orders collection");
        assert_eq!(orders.rows, 5);
        assert!(orders.approx_bytes > 0);
        assert_eq!(collections.len(), 6);
    }
}
