//! Integration tests for ChineTonUsine.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the services
//! cargo run -p ctu-portal &
//! cargo run -p ctu-admin &
//!
//! # Run integration tests
//! cargo test -p ctu-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they require running servers.
//!
//! # Test Categories
//!
//! - `portal_cards` - Business-card gallery flows against the portal
//! - `admin_panel` - Admin page flows against the admin panel

/// Base URL for the portal (configurable via environment).
#[must_use]
pub fn portal_base_url() -> String {
    std::env::var("PORTAL_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Header selecting a mock identity on both services.
pub const DEMO_USER_HEADER: &str = "x-demo-user";
