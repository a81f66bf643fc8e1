//! Repository for platform alerts.

use ctu_core::{AlertId, AlertSeverity};

use super::{MockDb, RepositoryError};
use crate::models::PlatformAlert;

/// Repository for alert operations.
pub struct AlertRepository<'a> {
    db: &'a MockDb,
}

impl<'a> AlertRepository<'a> {
    /// Create a new alert repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Alerts, optionally restricted to a minimum severity, newest first.
    pub async fn list(&self, min_severity: Option<AlertSeverity>) -> Vec<PlatformAlert> {
        let mut alerts: Vec<PlatformAlert> = self
            .db
            .alerts
            .read()
            .await
            .iter()
            .filter(|a| min_severity.is_none_or(|min| a.severity >= min))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts
    }

    /// Number of unread alerts.
    pub async fn unread_count(&self) -> usize {
        self.db
            .alerts
            .read()
            .await
            .iter()
            .filter(|a| !a.read)
            .count()
    }

    /// Mark an alert as read. Marking an already-read alert is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown alert.
    pub async fn mark_read(&self, id: &AlertId) -> Result<PlatformAlert, RepositoryError> {
        let mut alerts = self.db.alerts.write().await;
        let alert = alerts
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(RepositoryError::NotFound)?;
        alert.read = true;
        Ok(alert.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_min_severity_filter() {
        let db = MockDb::seeded();
        let repository = AlertRepository::new(&db);
        let serious = repository.list(Some(AlertSeverity::Warning)).await;
        assert!(serious.iter().all(|a| a.severity >= AlertSeverity::Warning));
        assert!(serious.len() < repository.list(None).await.len());
    }

    #[tokio::test]
    async fn test_mark_read_drops_unread_count() {
        let db = MockDb::seeded();
        let repository = AlertRepository::new(&db);
        let before = repository.unread_count().await;
        assert_eq!(before, 2);

        repository
            .mark_read(&AlertId::new("alert-payout-delay"))
            .await
            .expect("alert exists");
        assert_eq!(repository.unread_count().await, before - 1);

        // Idempotent
        repository
            .mark_read(&AlertId::new("alert-payout-delay"))
            .await
            .expect("alert exists");
        assert_eq!(repository.unread_count().await, before - 1);
    }
}
