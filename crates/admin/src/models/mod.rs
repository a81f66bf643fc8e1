//! Admin domain types.

pub mod order;
pub mod review_queue;
pub mod supplier;

pub use order::AdminOrder;
pub use review_queue::{ContentType, DocumentType, PlatformAlert, ReportedContent, VerificationDocument};
pub use supplier::SupplierAccount;
