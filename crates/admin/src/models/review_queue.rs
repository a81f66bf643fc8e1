//! Review queues: verification documents, reported content, and alerts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ctu_core::{AlertId, AlertSeverity, DocumentId, DocumentStatus, ModerationStatus, SupplierId};

/// Kind of verification document a supplier can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// French company registration extract.
    Kbis,
    InsuranceCertificate,
    QualityCertificate,
    IdentityProof,
}

/// A verification document awaiting (or past) review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationDocument {
    pub id: DocumentId,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer's note, set on approval or rejection.
    pub review_note: Option<String>,
}

/// Kind of content a report can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Product,
    Review,
    Message,
}

/// A piece of reported content in the moderation queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedContent {
    pub id: String,
    pub content_type: ContentType,
    /// Short excerpt of the reported content.
    pub excerpt: String,
    pub reason: String,
    pub reporter: String,
    pub status: ModerationStatus,
    pub reported_at: DateTime<Utc>,
}

/// A platform alert shown to operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformAlert {
    pub id: AlertId,
    pub severity: AlertSeverity,
    pub message: String,
    /// Emitting subsystem (e.g., "payments", "verification").
    pub source: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
