//! Repository for supplier verification documents.

use chrono::Utc;

use ctu_core::{DocumentId, DocumentStatus};

use super::{MockDb, RepositoryError};
use crate::models::VerificationDocument;

/// Repository for verification document operations.
pub struct DocumentRepository<'a> {
    db: &'a MockDb,
}

impl<'a> DocumentRepository<'a> {
    /// Create a new document repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Documents, optionally restricted to one status, oldest submission
    /// first (review queues drain front to back).
    pub async fn list(&self, status: Option<DocumentStatus>) -> Vec<VerificationDocument> {
        let mut documents: Vec<VerificationDocument> = self
            .db
            .documents
            .read()
            .await
            .iter()
            .filter(|d| status.is_none_or(|s| d.status == s))
            .cloned()
            .collect();
        documents.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        documents
    }

    /// Review a pending document: approve or reject with a note.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown document, and
    /// `RepositoryError::Conflict` if it was already reviewed.
    pub async fn review(
        &self,
        id: &DocumentId,
        approve: bool,
        note: Option<String>,
    ) -> Result<VerificationDocument, RepositoryError> {
        let mut documents = self.db.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if document.status != DocumentStatus::Pending {
            return Err(RepositoryError::Conflict(format!(
                "document already {:?}",
                document.status
            )));
        }

        document.status = if approve {
            DocumentStatus::Approved
        } else {
            DocumentStatus::Rejected
        };
        document.reviewed_at = Some(Utc::now());
        document.review_note = note;
        Ok(document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_queue_is_oldest_first() {
        let db = MockDb::seeded();
        let repository = DocumentRepository::new(&db);
        let pending = repository.list(Some(DocumentStatus::Pending)).await;
        assert_eq!(pending.len(), 2);
        assert!(pending.windows(2).all(|w| w[0].submitted_at <= w[1].submitted_at));
    }

    #[tokio::test]
    async fn test_reject_sets_note_and_timestamp() {
        let db = MockDb::seeded();
        let repository = DocumentRepository::new(&db);
        let id = DocumentId::new("doc-textiles-kbis");

        let rejected = repository
            .review(&id, false, Some("Extrait expiré.".to_owned()))
            .await
            .expect("pending document");
        assert_eq!(rejected.status, DocumentStatus::Rejected);
        assert!(rejected.reviewed_at.is_some());
        assert_eq!(rejected.review_note.as_deref(), Some("Extrait expiré."));

        // Reviewing twice conflicts
        let err = repository
            .review(&id, true, None)
            .await
            .expect_err("already reviewed");
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }
}
