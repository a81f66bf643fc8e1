//! Influencer-facing domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ctu_core::{CollaborationId, CollaborationStatus, Price, SupplierId, UserId};

/// A promotion campaign between an influencer and a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: CollaborationId,
    pub influencer_id: UserId,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub campaign: String,
    /// Commission on referred sales, in percent.
    pub commission_pct: Decimal,
    pub status: CollaborationStatus,
    pub started_at: DateTime<Utc>,
}

/// An influencer's referral program state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralAccount {
    pub influencer_id: UserId,
    /// Shareable referral code (e.g., "CTU-LEA24").
    pub code: String,
    pub clicks: u32,
    pub signups: u32,
    pub earnings: Price,
}

/// One entry in the star (loyalty point) ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarTransaction {
    pub id: String,
    pub influencer_id: UserId,
    /// Positive for earned stars, negative for redemptions.
    pub delta: i32,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Aggregate influencer performance, derived from the other records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerStats {
    pub active_collaborations: usize,
    pub completed_collaborations: usize,
    pub referral_clicks: u32,
    pub referral_signups: u32,
    pub total_earnings: Price,
    pub star_balance: i64,
}
