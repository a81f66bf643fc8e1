//! Request middleware and extractors for the admin panel.

pub mod auth;

pub use auth::RequireAdmin;
