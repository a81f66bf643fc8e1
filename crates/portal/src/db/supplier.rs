//! Repository for supplier-scoped data.
//!
//! Every query takes the owning supplier id and never returns rows scoped to
//! another supplier; the route layer decides who may pass which id in.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use ctu_core::{ConversationId, ReviewId, SupplierId};

use super::{MockDb, RepositoryError};
use crate::models::{
    Conversation, CustomerAccount, Message, MonthlyStat, ProductSummary, Review, SupplierOrder,
    SupplierProfile,
};

/// Repository for supplier data operations.
pub struct SupplierRepository<'a> {
    db: &'a MockDb,
}

impl<'a> SupplierRepository<'a> {
    /// Create a new supplier repository.
    #[must_use]
    pub const fn new(db: &'a MockDb) -> Self {
        Self { db }
    }

    /// Get a supplier's profile by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown supplier.
    pub async fn profile(&self, id: &SupplierId) -> Result<SupplierProfile, RepositoryError> {
        self.db
            .suppliers
            .read()
            .await
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    /// All orders for a supplier, newest first.
    pub async fn orders(&self, id: &SupplierId) -> Vec<SupplierOrder> {
        let mut orders: Vec<SupplierOrder> = self
            .db
            .orders
            .read()
            .await
            .iter()
            .filter(|o| &o.supplier_id == id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    }

    /// Total order count and revenue for a supplier.
    pub async fn order_totals(&self, id: &SupplierId) -> (usize, Decimal) {
        let orders = self.db.orders.read().await;
        let scoped = orders.iter().filter(|o| &o.supplier_id == id);
        scoped.fold((0, Decimal::ZERO), |(count, revenue), order| {
            (count + 1, revenue + order.total.amount)
        })
    }

    /// Customers of a supplier, optionally filtered by a case-insensitive
    /// text query over name and company.
    pub async fn customers(&self, id: &SupplierId, query: Option<&str>) -> Vec<CustomerAccount> {
        let needle = query.map(str::to_lowercase);
        self.db
            .customers
            .read()
            .await
            .iter()
            .filter(|c| &c.supplier_id == id)
            .filter(|c| {
                needle.as_deref().is_none_or(|q| {
                    c.name.to_lowercase().contains(q) || c.company.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect()
    }

    /// All conversations of a supplier.
    pub async fn conversations(&self, id: &SupplierId) -> Vec<Conversation> {
        self.db
            .conversations
            .read()
            .await
            .iter()
            .filter(|c| &c.supplier_id == id)
            .cloned()
            .collect()
    }

    /// Mark every inbound message of a conversation as read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the conversation does not
    /// exist or belongs to another supplier.
    pub async fn mark_conversation_read(
        &self,
        supplier_id: &SupplierId,
        conversation_id: &ConversationId,
    ) -> Result<Conversation, RepositoryError> {
        let mut conversations = self.db.conversations.write().await;
        let conversation = conversations
            .iter_mut()
            .find(|c| &c.id == conversation_id && &c.supplier_id == supplier_id)
            .ok_or(RepositoryError::NotFound)?;
        for message in &mut conversation.messages {
            if !message.from_supplier {
                message.read = true;
            }
        }
        Ok(conversation.clone())
    }

    /// Append a supplier reply to a conversation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the conversation does not
    /// exist or belongs to another supplier.
    pub async fn reply(
        &self,
        supplier_id: &SupplierId,
        conversation_id: &ConversationId,
        body: String,
    ) -> Result<Message, RepositoryError> {
        let mut conversations = self.db.conversations.write().await;
        let conversation = conversations
            .iter_mut()
            .find(|c| &c.id == conversation_id && &c.supplier_id == supplier_id)
            .ok_or(RepositoryError::NotFound)?;
        let message = Message {
            id: Uuid::new_v4().to_string(),
            from_supplier: true,
            body,
            sent_at: Utc::now(),
            read: true,
        };
        conversation.messages.push(message.clone());
        Ok(message)
    }

    /// Reviews of a supplier, optionally restricted to a minimum rating.
    pub async fn reviews(&self, id: &SupplierId, min_rating: Option<u8>) -> Vec<Review> {
        self.db
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| &r.supplier_id == id)
            .filter(|r| min_rating.is_none_or(|min| r.rating >= min))
            .cloned()
            .collect()
    }

    /// Attach the supplier's reply to a review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the review does not exist or
    /// belongs to another supplier.
    pub async fn reply_to_review(
        &self,
        supplier_id: &SupplierId,
        review_id: &ReviewId,
        reply: String,
    ) -> Result<Review, RepositoryError> {
        let mut reviews = self.db.reviews.write().await;
        let review = reviews
            .iter_mut()
            .find(|r| &r.id == review_id && &r.supplier_id == supplier_id)
            .ok_or(RepositoryError::NotFound)?;
        review.reply = Some(reply);
        Ok(review.clone())
    }

    /// Monthly analytics series for a supplier, oldest month first.
    pub async fn monthly_stats(&self, id: &SupplierId) -> Vec<MonthlyStat> {
        let mut stats: Vec<MonthlyStat> = self
            .db
            .monthly_stats
            .read()
            .await
            .iter()
            .filter(|s| &s.supplier_id == id)
            .cloned()
            .collect();
        stats.sort_by(|a, b| a.month.cmp(&b.month));
        stats
    }

    /// Top products of a supplier by revenue.
    pub async fn top_products(&self, id: &SupplierId, limit: usize) -> Vec<ProductSummary> {
        let mut products: Vec<ProductSummary> = self
            .db
            .products
            .read()
            .await
            .iter()
            .filter(|p| &p.supplier_id == id)
            .cloned()
            .collect();
        products.sort_by(|a, b| b.revenue.amount.cmp(&a.revenue.amount));
        products.truncate(limit);
        products
    }

    /// All settings of a supplier, keyed by the bare setting name.
    pub async fn settings(&self, id: &SupplierId) -> Vec<(String, JsonValue)> {
        let prefix = format!("supplier:{id}:");
        let settings = self.db.settings.read().await;
        let mut entries: Vec<(String, JsonValue)> = settings
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .map(|bare| (bare.to_owned(), value.clone()))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Set a supplier setting.
    pub async fn set_setting(&self, id: &SupplierId, key: &str, value: JsonValue) {
        let mut settings = self.db.settings.write().await;
        settings.insert(format!("supplier:{id}:{key}"), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::DEMO_SUPPLIER_ID;

    fn demo() -> SupplierId {
        SupplierId::new(DEMO_SUPPLIER_ID)
    }

    #[tokio::test]
    async fn test_orders_are_scoped_and_sorted() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let orders = repository.orders(&demo()).await;
        assert!(!orders.is_empty());
        assert!(orders.iter().all(|o| o.supplier_id == demo()));
        assert!(orders.windows(2).all(|w| w[0].placed_at >= w[1].placed_at));
    }

    #[tokio::test]
    async fn test_customer_search_matches_company() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let hits = repository.customers(&demo(), Some("beauregard")).await;
        assert_eq!(hits.len(), 1);
        assert!(repository.customers(&demo(), Some("zzz")).await.is_empty());
    }

    #[tokio::test]
    async fn test_mark_read_clears_inbound_only() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let conversation = repository
            .mark_conversation_read(&demo(), &ConversationId::new("conv-halles"))
            .await
            .expect("conversation exists");
        assert_eq!(conversation.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_reply_appends_read_outbound_message() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let message = repository
            .reply(
                &demo(),
                &ConversationId::new("conv-beauregard"),
                "Échantillon expédié ce jour.".to_owned(),
            )
            .await
            .expect("conversation exists");
        assert!(message.from_supplier);
        assert!(message.read);

        let conversations = repository.conversations(&demo()).await;
        let thread = conversations
            .iter()
            .find(|c| c.id == ConversationId::new("conv-beauregard"))
            .expect("thread");
        assert_eq!(thread.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_reply_to_foreign_conversation_is_not_found() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let err = repository
            .reply(
                &SupplierId::new("sup-shenzhen-led"),
                &ConversationId::new("conv-halles"),
                "intrusion".to_owned(),
            )
            .await
            .expect_err("scoped");
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_reviews_min_rating_filter() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        let all = repository.reviews(&demo(), None).await;
        let five_only = repository.reviews(&demo(), Some(5)).await;
        assert!(five_only.len() < all.len());
        assert!(five_only.iter().all(|r| r.rating == 5));
    }

    #[tokio::test]
    async fn test_settings_round_trip() {
        let db = MockDb::seeded();
        let repository = SupplierRepository::new(&db);
        repository
            .set_setting(&demo(), "timezone", serde_json::json!("Europe/Paris"))
            .await;
        let settings = repository.settings(&demo()).await;
        assert!(
            settings
                .iter()
                .any(|(k, v)| k == "timezone" && v == "Europe/Paris")
        );
        // Keys come back bare, without the namespace prefix
        assert!(settings.iter().all(|(k, _)| !k.starts_with("supplier:")));
    }
}
