//! ChineTonUsine Portal library.
//!
//! This crate provides the portal functionality as a library,
//! allowing it to be tested and reused.
//!
//! The portal serves three audiences from one binary:
//! - suppliers (dashboard, analytics, customers, messages, reviews, settings,
//!   business-card gallery)
//! - influencers (collaborations, referral program, stars, search, stats)
//! - anonymous visitors (public supplier profiles and public cards)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
