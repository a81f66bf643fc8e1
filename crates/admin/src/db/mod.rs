//! In-memory data layer for the admin panel.
//!
//! Same stance as the portal: no backend of record exists yet for these
//! pages, so each one is backed by a repository over a dataset seeded at
//! startup. Mutations (approvals, suspensions, mark-as-read) update shared
//! in-process state and are lost on restart.

pub mod alerts;
pub mod documents;
pub mod moderation;
pub mod orders;
pub mod reports;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod suppliers;

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio::sync::RwLock;

pub use alerts::AlertRepository;
pub use documents::DocumentRepository;
pub use moderation::ModerationRepository;
pub use orders::{OrderFilter, OrderRepository};
pub use reports::ReportsRepository;
pub use settings::SettingsRepository;
pub use stats::StatsRepository;
pub use suppliers::{SupplierFilter, SupplierRepository};

use crate::models::{AdminOrder, PlatformAlert, ReportedContent, SupplierAccount, VerificationDocument};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The operation conflicts with current state (e.g., approving a
    /// document that was already reviewed).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// The admin panel's in-memory dataset.
#[derive(Debug, Default)]
pub struct MockDb {
    pub(crate) orders: RwLock<Vec<AdminOrder>>,
    pub(crate) suppliers: RwLock<Vec<SupplierAccount>>,
    pub(crate) documents: RwLock<Vec<VerificationDocument>>,
    pub(crate) moderation: RwLock<Vec<ReportedContent>>,
    pub(crate) alerts: RwLock<Vec<PlatformAlert>>,
    /// Namespaced key/value settings; global keys have no user segment,
    /// per-admin keys use `admin:<user>:<key>`.
    pub(crate) settings: RwLock<HashMap<String, JsonValue>>,
}

impl MockDb {
    /// An empty dataset (used by tests that seed their own rows).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo dataset every admin instance starts with.
    #[must_use]
    pub fn seeded() -> Self {
        seed::seeded_db()
    }
}
