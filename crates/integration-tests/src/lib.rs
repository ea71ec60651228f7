//! Integration tests for Cakeshop.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the admin server against a running bakery backend
//! cargo run -p cakeshop-admin
//!
//! # Run integration tests
//! cargo test -p cakeshop-integration-tests -- --ignored
//! ```
//!
//! Tests target a live admin server; its base URL comes from
//! `ADMIN_BASE_URL` (default `http://localhost:3001`).

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
