//! ChineTonUsine Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused.
//!
//! The panel covers platform operations: orders across all suppliers,
//! supplier accounts, verification documents, content moderation, platform
//! alerts, dataset overview, revenue reports, and settings.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
