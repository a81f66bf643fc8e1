//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Supplier dashboard (supplier role)
//! GET  /supplier/dashboard              - Metric tiles + recent orders
//! GET  /supplier/analytics              - Monthly series + top products
//! GET  /supplier/customers              - Customer list (?q= text search)
//! GET  /supplier/messages               - Conversations with unread counts
//! POST /supplier/messages/{id}/read     - Mark a conversation read
//! POST /supplier/messages/{id}/reply    - Append a reply
//! GET  /supplier/reviews                - Reviews (?min_rating=)
//! POST /supplier/reviews/{id}/reply     - Reply to a review
//! GET  /supplier/settings               - All settings
//! PUT  /supplier/settings/{key}         - Set one setting
//!
//! # Influencer dashboard (influencer role)
//! GET  /influencer/collaborations       - Collaborations (?status=)
//! POST /influencer/collaborations/{id}/accept
//! POST /influencer/collaborations/{id}/decline
//! GET  /influencer/referral             - Referral account
//! POST /influencer/referral/regenerate  - New referral code
//! GET  /influencer/stars                - Star balance + ledger
//! POST /influencer/stars/redeem         - Redeem stars
//! GET  /influencer/search               - Supplier search (?q=&category=&verified=)
//! GET  /influencer/stats                - Aggregate performance
//!
//! # Business cards
//! GET    /suppliers/{id}/cards          - Gallery (owner: all, public: visible only)
//! POST   /suppliers/{id}/cards          - Create a card
//! GET    /cards/{id}                    - Single card
//! PATCH  /cards/{id}                    - Partial update
//! DELETE /cards/{id}                    - Delete
//! POST   /cards/{id}/duplicate          - Duplicate under a new name
//! POST   /cards/{id}/download           - Bump download counter
//! POST   /cards/{id}/share              - Bump share counter
//! GET    /cards/{id}/render             - Standalone HTML render (?scale=)
//!
//! # Public
//! GET  /suppliers/{id}/profile          - Public supplier profile (HTML)
//! ```

pub mod cards;
pub mod influencer;
pub mod profile;
pub mod supplier;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the supplier dashboard router.
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(supplier::dashboard))
        .route("/analytics", get(supplier::analytics))
        .route("/customers", get(supplier::customers))
        .route("/messages", get(supplier::messages))
        .route("/messages/{id}/read", post(supplier::mark_read))
        .route("/messages/{id}/reply", post(supplier::reply))
        .route("/reviews", get(supplier::reviews))
        .route("/reviews/{id}/reply", post(supplier::reply_to_review))
        .route("/settings", get(supplier::settings))
        .route("/settings/{key}", put(supplier::set_setting))
}

/// Create the influencer dashboard router.
pub fn influencer_routes() -> Router<AppState> {
    Router::new()
        .route("/collaborations", get(influencer::collaborations))
        .route(
            "/collaborations/{id}/accept",
            post(influencer::accept_collaboration),
        )
        .route(
            "/collaborations/{id}/decline",
            post(influencer::decline_collaboration),
        )
        .route("/referral", get(influencer::referral))
        .route("/referral/regenerate", post(influencer::regenerate_code))
        .route("/stars", get(influencer::stars))
        .route("/stars/redeem", post(influencer::redeem_stars))
        .route("/search", get(influencer::search))
        .route("/stats", get(influencer::stats))
}

/// Create the card and public-profile router.
pub fn card_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/suppliers/{id}/cards",
            get(cards::list).post(cards::create),
        )
        .route("/suppliers/{id}/profile", get(profile::show))
        .route(
            "/cards/{id}",
            get(cards::show).patch(cards::update).delete(cards::delete),
        )
        .route("/cards/{id}/duplicate", post(cards::duplicate))
        .route("/cards/{id}/download", post(cards::download))
        .route("/cards/{id}/share", post(cards::share))
        .route("/cards/{id}/render", get(cards::render))
}

/// Compose the full portal router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/supplier", supplier_routes())
        .nest("/influencer", influencer_routes())
        .merge(card_routes())
}
