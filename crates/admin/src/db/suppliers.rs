//! Repository for supplier account management.

use ctu_core::{SupplierId, SupplierStatus};

use super::{MockDb, RepositoryError};
use crate::models::SupplierAccount;

/// Client-side filters for the supplier list.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    /// Case-insensitive match over company name, email, and country.
    pub query: Option<String>,
    pub status: Option<SupplierStatus>,
    pub verified: Option<bool>,
}

impl SupplierFilter {
    fn matches(&self, supplier: &SupplierAccount) -> bool {
        let text_ok = self.query.as_deref().is_none_or(|q| {
            let q = q.to_lowercase();
            supplier.company_name.to_lowercase().contains(&q)
                || supplier.email.as_str().to_lowercase().contains(&q)
                || supplier.country.to_lowercase().contains(&q)
        });
        let status_ok = self.status.is_none_or(|s| supplier.status == s);
        let verified_ok = self.verified.is_none_or(|v| supplier.verified == v);
        text_ok && status_ok && verified_ok
    }
}

/// Repository for supplier account operations.
pub struct SupplierRepository<'a> {
    db: &'a MockDb,
}

impl<'a> SupplierRepository<'a> {
    /// Create a new supplier repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Suppliers matching the filter, alphabetical by company name.
    pub async fn list(&self, filter: &SupplierFilter) -> Vec<SupplierAccount> {
        let mut suppliers: Vec<SupplierAccount> = self
            .db
            .suppliers
            .read()
            .await
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        suppliers.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        suppliers
    }

    /// A single supplier by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown supplier.
    pub async fn get(&self, id: &SupplierId) -> Result<SupplierAccount, RepositoryError> {
        self.db
            .suppliers
            .read()
            .await
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// Suspend an active supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown supplier, and
    /// `RepositoryError::Conflict` if it is already suspended.
    pub async fn suspend(&self, id: &SupplierId) -> Result<SupplierAccount, RepositoryError> {
        self.transition(id, SupplierStatus::Suspended).await
    }

    /// Reactivate a suspended or pending supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown supplier, and
    /// `RepositoryError::Conflict` if it is already active.
    pub async fn reactivate(&self, id: &SupplierId) -> Result<SupplierAccount, RepositoryError> {
        self.transition(id, SupplierStatus::Active).await
    }

    async fn transition(
        &self,
        id: &SupplierId,
        to: SupplierStatus,
    ) -> Result<SupplierAccount, RepositoryError> {
        let mut suppliers = self.db.suppliers.write().await;
        let supplier = suppliers
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if supplier.status == to {
            return Err(RepositoryError::Conflict(format!(
                "supplier already {to:?}"
            )));
        }
        supplier.status = to;
        Ok(supplier.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filters_compose() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);

        let french = repository
            .list(&SupplierFilter {
                query: Some("france".to_owned()),
                ..SupplierFilter::default()
            })
            .await;
        assert!(french.iter().all(|s| s.country == "France"));

        let unverified = repository
            .list(&SupplierFilter {
                verified: Some(false),
                ..SupplierFilter::default()
            })
            .await;
        assert!(unverified.iter().all(|s| !s.verified));
    }

    #[tokio::test]
    async fn test_suspend_then_reactivate() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let id = SupplierId::new("sup-atelier-lefort");

        let suspended = repository.suspend(&id).await.expect("active supplier");
        assert_eq!(suspended.status, SupplierStatus::Suspended);

        // Suspending twice conflicts
        let err = repository.suspend(&id).await.expect_err("already suspended");
        assert!(matches!(err, RepositoryError::Conflict(_)));

        let active = repository.reactivate(&id).await.expect("suspended supplier");
        assert_eq!(active.status, SupplierStatus::Active);
    }
}
