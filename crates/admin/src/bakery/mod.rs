//! Bakery backend API client.
//!
//! The backend does the real work (persistence, workflow transitions); this
//! module is the typed boundary in front of it. Four REST operations are
//! consumed: fetch-all, fetch-by-id, update-status, delete. Authentication
//! is a bearer token configured at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use cakeshop_admin::bakery::BakeryClient;
//!
//! let client = BakeryClient::new(&config.bakery);
//!
//! // Fetch the full order collection
//! let raw = client.fetch_orders().await?;
//!
//! // Move an order along the workflow
//! let updated = client.update_order_status("o-123", "s-lam").await?;
//! ```

mod client;
pub mod conversions;
pub mod payload;
pub mod types;

pub use client::BakeryClient;
pub use conversions::normalize_order;
pub use types::{Order, OrderItem};

use thiserror::Error;

/// Errors that can occur when talking to the bakery backend.
#[derive(Debug, Error)]
pub enum BakeryApiError {
    /// HTTP request failed (connectivity, DNS, or an unparseable body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bearer token missing or rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server-reported failure: non-OK envelope or error body. The message
    /// is surfaced to the dashboard verbatim.
    #[error("{0}")]
    Server(String),
}
