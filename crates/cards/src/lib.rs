//! ChineTonUsine business-card domain.
//!
//! A business card is a shareable, styled contact-information artifact owned
//! by a supplier. This crate holds everything about them:
//!
//! - [`model`] - The card data model ([`BusinessCardData`], [`SavedBusinessCard`])
//!   and the patch/draft types used by the store.
//! - [`storage`] - The [`Storage`] backend seam (namespaced key/value get/set)
//!   with in-memory and file-backed implementations.
//! - [`store`] - [`CardStore`], the CRUD service enforcing the single
//!   default-card-per-supplier invariant.
//! - [`render`] - The pure template renderer mapping card data and a scale
//!   factor to a visual description.
//! - [`seed`] - The fixed demo record the store degrades to when its blob is
//!   absent or unreadable.
//!
//! The store keeps all suppliers' cards in one JSON array under a single
//! namespaced key and filters in memory by supplier. The backend is an
//! explicit seam, so tests run against [`storage::MemoryStorage`] and
//! deployments pick a directory-backed store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod model;
pub mod render;
pub mod seed;
pub mod storage;
pub mod store;

pub use model::{BusinessCardData, CardDraft, CardPatch, CardTemplate, ElementSize, SavedBusinessCard};
pub use render::{CardFace, compose};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CardStore, CardStoreError};
