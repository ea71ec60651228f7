//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Orders (read from bakery backend, cached in the store)
//! GET  /orders                  - Order grid (filter/sort/paginate)
//! POST /orders/refresh          - Re-fetch the collection from the backend
//! GET  /orders/{id}             - Order detail
//! POST /orders/{id}/status      - Move one order to a new status
//! POST /orders/{id}/delete      - Delete one order
//!
//! # Bulk actions (comma-separated ids, per-item results)
//! POST /orders/bulk/status      - Bulk status change
//! POST /orders/bulk/delete      - Bulk delete
//!
//! # Selection (server-held checkbox state for bulk actions)
//! POST /orders/selection/toggle - Toggle one row
//! POST /orders/selection/page   - Toggle the visible page
//! POST /orders/selection/clear  - Clear the selection
//!
//! # Export
//! GET  /orders/export           - Download the filtered grid as CSV
//! ```

pub mod orders;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        // Orders
        .route("/orders", get(orders::index))
        .route("/orders/refresh", post(orders::refresh))
        .route("/orders/export", get(orders::export))
        .route("/orders/{id}", get(orders::show))
        .route("/orders/{id}/status", post(orders::set_status))
        .route("/orders/{id}/delete", post(orders::delete))
        // Bulk actions
        .route("/orders/bulk/status", post(orders::bulk_status))
        .route("/orders/bulk/delete", post(orders::bulk_delete))
        // Selection
        .route("/orders/selection/toggle", post(orders::toggle_selection))
        .route("/orders/selection/page", post(orders::toggle_page_selection))
        .route("/orders/selection/clear", post(orders::clear_selection))
}

/// `GET /health` - liveness probe.
async fn health() -> &'static str {
    "ok"
}
