//! In-memory data layer for the portal.
//!
//! The platform has no backend of record yet for dashboard data: every page
//! works against repositories over a dataset seeded at startup, and the
//! repository surface is the contract future backend work must implement.
//! Mutations update shared in-process state and are intentionally lost on
//! restart.
//!
//! Business cards are the exception - they persist through
//! [`ctu_cards::CardStore`], not this module.

pub mod influencer;
pub mod seed;
pub mod supplier;

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use thiserror::Error;
use tokio::sync::RwLock;

pub use influencer::InfluencerRepository;
pub use supplier::SupplierRepository;

use crate::models::{
    Collaboration, Conversation, CustomerAccount, MonthlyStat, ProductSummary, ReferralAccount,
    Review, StarTransaction, SupplierOrder, SupplierProfile,
};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// The operation conflicts with current state (e.g., accepting a
    /// collaboration that is no longer pending).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// The portal's in-memory dataset.
///
/// Each table sits behind its own lock so unrelated pages never contend.
#[derive(Debug, Default)]
pub struct MockDb {
    pub(crate) suppliers: RwLock<Vec<SupplierProfile>>,
    pub(crate) orders: RwLock<Vec<SupplierOrder>>,
    pub(crate) customers: RwLock<Vec<CustomerAccount>>,
    pub(crate) conversations: RwLock<Vec<Conversation>>,
    pub(crate) reviews: RwLock<Vec<Review>>,
    pub(crate) monthly_stats: RwLock<Vec<MonthlyStat>>,
    pub(crate) products: RwLock<Vec<ProductSummary>>,
    pub(crate) collaborations: RwLock<Vec<Collaboration>>,
    pub(crate) referrals: RwLock<Vec<ReferralAccount>>,
    pub(crate) stars: RwLock<Vec<StarTransaction>>,
    /// Namespaced key/value settings, keys like `supplier:<id>:<key>`.
    pub(crate) settings: RwLock<HashMap<String, JsonValue>>,
}

impl MockDb {
    /// An empty dataset (used by tests that seed their own rows).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo dataset every portal instance starts with.
    #[must_use]
    pub fn seeded() -> Self {
        seed::seeded_db()
    }
}
