//! Repository for the content moderation queue.

use ctu_core::ModerationStatus;

use super::{MockDb, RepositoryError};
use crate::models::ReportedContent;

/// Repository for moderation operations.
pub struct ModerationRepository<'a> {
    db: &'a MockDb,
}

impl<'a> ModerationRepository<'a> {
    /// Create a new moderation repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Reports, optionally restricted to one status, oldest first.
    pub async fn list(&self, status: Option<ModerationStatus>) -> Vec<ReportedContent> {
        let mut reports: Vec<ReportedContent> = self
            .db
            .moderation
            .read()
            .await
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .cloned()
            .collect();
        reports.sort_by(|a, b| a.reported_at.cmp(&b.reported_at));
        reports
    }

    /// Decide a pending report: keep the content (approve) or remove it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown report, and
    /// `RepositoryError::Conflict` if it was already decided.
    pub async fn decide(
        &self,
        id: &str,
        keep: bool,
    ) -> Result<ReportedContent, RepositoryError> {
        let mut reports = self.db.moderation.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if report.status != ModerationStatus::Pending {
            return Err(RepositoryError::Conflict(format!(
                "report already {:?}",
                report.status
            )));
        }

        report.status = if keep {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Removed
        };
        Ok(report.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decide_pending_report() {
        let db = MockDb::seeded();
        let repository = ModerationRepository::new(&db);

        let kept = repository
            .decide("rep-review-lumen", true)
            .await
            .expect("pending report");
        assert_eq!(kept.status, ModerationStatus::Approved);

        let err = repository
            .decide("rep-review-lumen", false)
            .await
            .expect_err("already decided");
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_pending_filter() {
        let db = MockDb::seeded();
        let repository = ModerationRepository::new(&db);
        let pending = repository.list(Some(ModerationStatus::Pending)).await;
        assert_eq!(pending.len(), 2);
        assert!(
            pending
                .iter()
                .all(|r| r.status == ModerationStatus::Pending)
        );
    }
}
