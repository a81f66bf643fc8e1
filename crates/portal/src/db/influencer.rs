//! Repository for influencer-scoped data.

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use rust_decimal::Decimal;

use ctu_core::{CollaborationId, CollaborationStatus, CurrencyCode, Price, UserId};

use super::{MockDb, RepositoryError};
use crate::models::{
    Collaboration, InfluencerStats, ReferralAccount, StarTransaction, SupplierProfile,
};

/// Length of the random part of a referral code.
const REFERRAL_CODE_LEN: usize = 6;

/// Repository for influencer data operations.
pub struct InfluencerRepository<'a> {
    db: &'a MockDb,
}

impl<'a> InfluencerRepository<'a> {
    /// Create a new influencer repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Collaborations of an influencer, optionally filtered by status.
    pub async fn collaborations(
        &self,
        influencer_id: &UserId,
        status: Option<CollaborationStatus>,
    ) -> Vec<Collaboration> {
        self.db
            .collaborations
            .read()
            .await
            .iter()
            .filter(|c| &c.influencer_id == influencer_id)
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect()
    }

    /// Accept or decline a pending collaboration.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the collaboration does not
    /// exist or belongs to another influencer, and
    /// `RepositoryError::Conflict` if it is no longer pending.
    pub async fn respond_to_collaboration(
        &self,
        influencer_id: &UserId,
        collaboration_id: &CollaborationId,
        accept: bool,
    ) -> Result<Collaboration, RepositoryError> {
        let mut collaborations = self.db.collaborations.write().await;
        let collaboration = collaborations
            .iter_mut()
            .find(|c| &c.id == collaboration_id && &c.influencer_id == influencer_id)
            .ok_or(RepositoryError::NotFound)?;

        if collaboration.status != CollaborationStatus::Pending {
            return Err(RepositoryError::Conflict(format!(
                "collaboration is {:?}, only pending ones can be answered",
                collaboration.status
            )));
        }

        collaboration.status = if accept {
            CollaborationStatus::Active
        } else {
            CollaborationStatus::Declined
        };
        Ok(collaboration.clone())
    }

    /// The influencer's referral account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the influencer has no referral
    /// account.
    pub async fn referral(&self, influencer_id: &UserId) -> Result<ReferralAccount, RepositoryError> {
        self.db
            .referrals
            .read()
            .await
            .iter()
            .find(|r| &r.influencer_id == influencer_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// Replace the influencer's referral code with a fresh one. Counters and
    /// earnings carry over; only the code changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the influencer has no referral
    /// account.
    pub async fn regenerate_referral_code(
        &self,
        influencer_id: &UserId,
    ) -> Result<ReferralAccount, RepositoryError> {
        let mut referrals = self.db.referrals.write().await;
        let account = referrals
            .iter_mut()
            .find(|r| &r.influencer_id == influencer_id)
            .ok_or(RepositoryError::NotFound)?;

        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(REFERRAL_CODE_LEN)
            .map(char::from)
            .collect();
        account.code = format!("CTU-{}", suffix.to_uppercase());
        Ok(account.clone())
    }

    /// Star ledger of an influencer, newest first.
    pub async fn star_ledger(&self, influencer_id: &UserId) -> Vec<StarTransaction> {
        let mut ledger: Vec<StarTransaction> = self
            .db
            .stars
            .read()
            .await
            .iter()
            .filter(|t| &t.influencer_id == influencer_id)
            .cloned()
            .collect();
        ledger.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        ledger
    }

    /// Current star balance.
    pub async fn star_balance(&self, influencer_id: &UserId) -> i64 {
        self.db
            .stars
            .read()
            .await
            .iter()
            .filter(|t| &t.influencer_id == influencer_id)
            .map(|t| i64::from(t.delta))
            .sum()
    }

    /// Redeem stars against the balance.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the balance is insufficient.
    pub async fn redeem_stars(
        &self,
        influencer_id: &UserId,
        amount: u32,
        reason: String,
    ) -> Result<StarTransaction, RepositoryError> {
        let balance = self.star_balance(influencer_id).await;
        let amount_i64 = i64::from(amount);
        if amount_i64 > balance {
            return Err(RepositoryError::Conflict(format!(
                "balance {balance} is below requested {amount}"
            )));
        }

        let transaction = StarTransaction {
            id: format!("star-redeem-{}", Utc::now().timestamp_millis()),
            influencer_id: influencer_id.clone(),
            delta: -i32::try_from(amount_i64).unwrap_or(i32::MAX),
            reason,
            occurred_at: Utc::now(),
        };
        self.db.stars.write().await.push(transaction.clone());
        Ok(transaction)
    }

    /// Search active suppliers by free text, category, and verification flag.
    ///
    /// Text matches company name, description, and sector,
    /// case-insensitively. Category matches product categories.
    pub async fn search_suppliers(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        verified_only: bool,
    ) -> Vec<SupplierProfile> {
        let needle = query.map(str::to_lowercase);
        let category = category.map(str::to_lowercase);
        let products = self.db.products.read().await;

        self.db
            .suppliers
            .read()
            .await
            .iter()
            .filter(|s| s.status == ctu_core::SupplierStatus::Active)
            .filter(|s| !verified_only || s.verified)
            .filter(|s| {
                needle.as_deref().is_none_or(|q| {
                    s.company_name.to_lowercase().contains(q)
                        || s.description.to_lowercase().contains(q)
                        || s.sector.to_lowercase().contains(q)
                })
            })
            .filter(|s| {
                category.as_deref().is_none_or(|c| {
                    products
                        .iter()
                        .any(|p| p.supplier_id == s.id && p.category.to_lowercase() == c)
                })
            })
            .cloned()
            .collect()
    }

    /// Aggregate performance derived from collaborations, referral, and stars.
    pub async fn stats(&self, influencer_id: &UserId) -> InfluencerStats {
        let collaborations = self.collaborations(influencer_id, None).await;
        let referral = self.referral(influencer_id).await.ok();
        let star_balance = self.star_balance(influencer_id).await;

        let (clicks, signups, earnings) = referral.map_or(
            (0, 0, Price::new(Decimal::ZERO, CurrencyCode::EUR)),
            |r| (r.clicks, r.signups, r.earnings),
        );

        InfluencerStats {
            active_collaborations: collaborations
                .iter()
                .filter(|c| c.status == CollaborationStatus::Active)
                .count(),
            completed_collaborations: collaborations
                .iter()
                .filter(|c| c.status == CollaborationStatus::Completed)
                .count(),
            referral_clicks: clicks,
            referral_signups: signups,
            total_earnings: earnings,
            star_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::DEMO_INFLUENCER_ID;

    fn lea() -> UserId {
        UserId::new(DEMO_INFLUENCER_ID)
    }

    #[tokio::test]
    async fn test_accept_pending_collaboration() {
        let db = MockDb::seeded();
        let repository = InfluencerRepository::new(&db);
        let updated = repository
            .respond_to_collaboration(&lea(), &CollaborationId::new("collab-mobilier-chr"), true)
            .await
            .expect("pending collaboration");
        assert_eq!(updated.status, CollaborationStatus::Active);

        // Answering again conflicts - it is no longer pending
        let err = repository
            .respond_to_collaboration(&lea(), &CollaborationId::new("collab-mobilier-chr"), false)
            .await
            .expect_err("already answered");
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_redeem_checks_balance() {
        let db = MockDb::seeded();
        let repository = InfluencerRepository::new(&db);
        let balance = repository.star_balance(&lea()).await;
        assert_eq!(balance, 95); // 100 + 45 - 50 from the seed

        let err = repository
            .redeem_stars(&lea(), 1_000, "trop gourmand".to_owned())
            .await
            .expect_err("insufficient");
        assert!(matches!(err, RepositoryError::Conflict(_)));

        repository
            .redeem_stars(&lea(), 95, "tout solder".to_owned())
            .await
            .expect("exact balance");
        assert_eq!(repository.star_balance(&lea()).await, 0);
    }

    #[tokio::test]
    async fn test_regenerate_keeps_counters() {
        let db = MockDb::seeded();
        let repository = InfluencerRepository::new(&db);
        let before = repository.referral(&lea()).await.expect("account");
        let after = repository
            .regenerate_referral_code(&lea())
            .await
            .expect("account");
        assert_ne!(after.code, before.code);
        assert!(after.code.starts_with("CTU-"));
        assert_eq!(after.clicks, before.clicks);
        assert_eq!(after.earnings, before.earnings);
    }

    #[tokio::test]
    async fn test_search_filters_compose() {
        let db = MockDb::seeded();
        let repository = InfluencerRepository::new(&db);

        // Suspended suppliers never surface
        let all = repository.search_suppliers(None, None, false).await;
        assert!(all.iter().all(|s| s.company_name != "Guangzhou Packaging Co"));

        let verified = repository.search_suppliers(None, None, true).await;
        assert!(verified.iter().all(|s| s.verified));

        let led = repository
            .search_suppliers(Some("led"), None, false)
            .await;
        assert_eq!(led.len(), 1);

        let by_category = repository
            .search_suppliers(None, Some("mobilier"), false)
            .await;
        assert!(
            by_category
                .iter()
                .any(|s| s.company_name == "Atelier Lefort")
        );
    }

    #[tokio::test]
    async fn test_stats_aggregate() {
        let db = MockDb::seeded();
        let repository = InfluencerRepository::new(&db);
        let stats = repository.stats(&lea()).await;
        assert_eq!(stats.active_collaborations, 1);
        assert_eq!(stats.completed_collaborations, 1);
        assert_eq!(stats.referral_signups, 28);
        assert_eq!(stats.star_balance, 95);
    }
}
