//! Supplier-facing domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ctu_core::{
    ConversationId, Email, OrderId, OrderStatus, Price, ReviewId, SupplierId, SupplierStatus,
    UserId,
};

/// A supplier's public-facing profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub id: SupplierId,
    pub company_name: String,
    pub description: String,
    /// Industry sector (e.g., "Mobilier", "Textile").
    pub sector: String,
    pub city: String,
    pub country: String,
    pub email: Email,
    pub phone: String,
    pub website: Option<String>,
    /// Whether the platform has verified the supplier's documents.
    pub verified: bool,
    pub status: SupplierStatus,
    /// Average review rating, 0.0-5.0.
    pub rating: f32,
    pub joined_at: DateTime<Utc>,
}

/// An order as seen from the supplier's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierOrder {
    pub id: OrderId,
    /// Human-facing order number (e.g., "CTU-2025-0114").
    pub number: String,
    pub supplier_id: SupplierId,
    pub customer_name: String,
    pub total: Price,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// A buyer account, from the supplier's customer list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAccount {
    pub id: UserId,
    pub supplier_id: SupplierId,
    pub name: String,
    pub company: String,
    pub email: Email,
    pub country: String,
    pub orders_count: u32,
    pub total_spent: Price,
    pub last_order_at: DateTime<Utc>,
}

/// A message thread between a buyer and a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub supplier_id: SupplierId,
    pub contact_name: String,
    pub subject: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Messages from the buyer that the supplier has not read yet.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.from_supplier && !m.read)
            .count()
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from_supplier: bool,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

/// A buyer review of a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub supplier_id: SupplierId,
    pub author: String,
    /// 1-5 stars.
    pub rating: u8,
    pub comment: String,
    /// The supplier's reply, if any.
    pub reply: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// One month of supplier analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub supplier_id: SupplierId,
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub profile_views: u32,
    pub orders: u32,
    pub revenue: Price,
}

/// A product line, used for top-product analytics and influencer search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub supplier_id: SupplierId,
    pub name: String,
    pub category: String,
    pub orders: u32,
    pub revenue: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_counts_only_inbound_unread() {
        let conversation = Conversation {
            id: ConversationId::new("conv-1"),
            supplier_id: SupplierId::new("s1"),
            contact_name: "Paul".to_owned(),
            subject: "MOQ question".to_owned(),
            messages: vec![
                Message {
                    id: "m1".to_owned(),
                    from_supplier: false,
                    body: "What is your MOQ?".to_owned(),
                    sent_at: Utc::now(),
                    read: false,
                },
                Message {
                    id: "m2".to_owned(),
                    from_supplier: true,
                    body: "50 units.".to_owned(),
                    sent_at: Utc::now(),
                    read: false,
                },
                Message {
                    id: "m3".to_owned(),
                    from_supplier: false,
                    body: "Thanks!".to_owned(),
                    sent_at: Utc::now(),
                    read: true,
                },
            ],
        };
        assert_eq!(conversation.unread_count(), 1);
    }
}
