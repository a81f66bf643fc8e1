//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//! GET  /dashboard                   - Metric tiles + recent orders + unread alerts
//!
//! GET  /orders                      - Orders (?q=&status=&min_total=)
//! GET  /orders/{id}                 - Single order
//!
//! GET  /suppliers                   - Suppliers (?q=&status=&verified=)
//! GET  /suppliers/{id}              - Single supplier
//! POST /suppliers/{id}/suspend      - Suspend an active supplier
//! POST /suppliers/{id}/reactivate   - Reactivate a supplier
//!
//! GET  /documents                   - Verification documents (?status=)
//! POST /documents/{id}/approve      - Approve with optional note
//! POST /documents/{id}/reject       - Reject with optional note
//!
//! GET  /moderation                  - Reported content (?status=)
//! POST /moderation/{id}/approve     - Keep the content
//! POST /moderation/{id}/remove      - Remove the content
//!
//! GET  /alerts                      - Alerts (?min_severity=)
//! POST /alerts/{id}/read            - Mark an alert read
//!
//! GET  /database                    - Per-collection dataset overview
//! GET  /reports                     - Monthly aggregates + top suppliers
//!
//! GET  /settings                    - Settings by prefix (?prefix=)
//! PUT  /settings/{key}              - Set a global setting
//! ```
//!
//! All routes require the admin role via [`crate::middleware::RequireAdmin`].

pub mod alerts;
pub mod dashboard;
pub mod database;
pub mod documents;
pub mod moderation;
pub mod orders;
pub mod reports;
pub mod settings;
pub mod suppliers;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Compose the full admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::show))
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::show))
        .route("/suppliers", get(suppliers::list))
        .route("/suppliers/{id}", get(suppliers::show))
        .route("/suppliers/{id}/suspend", post(suppliers::suspend))
        .route("/suppliers/{id}/reactivate", post(suppliers::reactivate))
        .route("/documents", get(documents::list))
        .route("/documents/{id}/approve", post(documents::approve))
        .route("/documents/{id}/reject", post(documents::reject))
        .route("/moderation", get(moderation::list))
        .route("/moderation/{id}/approve", post(moderation::approve))
        .route("/moderation/{id}/remove", post(moderation::remove))
        .route("/alerts", get(alerts::list))
        .route("/alerts/{id}/read", post(alerts::mark_read))
        .route("/database", get(database::show))
        .route("/reports", get(reports::show))
        .route("/settings", get(settings::list))
        .route("/settings/{key}", put(settings::set))
}
