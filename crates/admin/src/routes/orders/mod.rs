//! Order management route handlers.
//!
//! Handlers for the order grid, order detail, single and bulk actions,
//! the selection set, and CSV export.

mod actions;
mod bulk;
mod export;
mod list;
pub mod types;

pub use types::{OrderDetailView, OrderRowView, OrdersQuery, OrdersResponse};

pub use list::{index, refresh, show};

pub use actions::{
    OrderIdInput, StatusInput, clear_selection, delete, set_status, toggle_page_selection,
    toggle_selection,
};

pub use bulk::{BulkOrdersInput, BulkStatusInput, bulk_delete, bulk_status};

pub use export::export;
