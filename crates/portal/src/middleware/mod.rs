//! Request middleware and extractors for the portal.

pub mod auth;

pub use auth::{OptionalUser, RequireInfluencer, RequireSupplier, RequireUser};
