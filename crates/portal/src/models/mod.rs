//! Domain types served by the portal.

pub mod influencer;
pub mod supplier;

pub use influencer::{Collaboration, InfluencerStats, ReferralAccount, StarTransaction};
pub use supplier::{
    Conversation, CustomerAccount, Message, MonthlyStat, ProductSummary, Review, SupplierOrder,
    SupplierProfile,
};
