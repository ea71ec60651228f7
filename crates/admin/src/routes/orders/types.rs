//! Query parameters and view models for order routes.

use serde::{Deserialize, Serialize};

use cakeshop_core::status_badge;

use crate::bakery::{Order, OrderItem};
use crate::store::OrderListState;
use crate::store::view::{OrderSortKey, OrderViewParams, PriceBucket, SortDir};

/// Query parameters accepted by the order grid.
///
/// All fields are optional; absent ones fall back to the defaults the grid
/// opens with (newest first, page 1, 10 rows).
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Search text matched against order code and customer name.
    pub q: Option<String>,
    /// Status filter: an exact status id or a name fragment.
    pub status: Option<String>,
    /// Product category filter.
    pub category: Option<String>,
    /// Price bucket filter.
    pub price: Option<String>,
    /// Sort key.
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub dir: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size.
    pub per_page: Option<usize>,
}

impl OrdersQuery {
    /// Translate the query into grid parameters. Unknown sort keys and
    /// buckets fall back to defaults rather than failing the request.
    #[must_use]
    pub fn into_params(self) -> OrderViewParams {
        let defaults = OrderViewParams::default();
        OrderViewParams {
            search: self.q.filter(|s| !s.trim().is_empty()),
            status: self.status.filter(|s| !s.trim().is_empty()),
            category: self.category.filter(|s| !s.trim().is_empty()),
            price: self.price.as_deref().and_then(PriceBucket::from_str_param),
            sort_by: self
                .sort
                .as_deref()
                .and_then(OrderSortKey::from_str_param)
                .unwrap_or(defaults.sort_by),
            sort_dir: self
                .dir
                .as_deref()
                .and_then(SortDir::from_str_param)
                .unwrap_or(defaults.sort_dir),
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        }
        .clamped()
    }
}

/// One row of the order grid, display-ready.
#[derive(Debug, Serialize)]
pub struct OrderRowView {
    /// Order entity id.
    pub id: String,
    /// Order code.
    pub code: String,
    /// Customer display name.
    pub client: String,
    /// Delivery date, `dd/mm/yyyy`.
    pub deadline: String,
    /// Final total in display format ("1.500.000 ₫").
    pub total: String,
    /// Final total in raw đồng, for client-side arithmetic.
    pub total_raw: i64,
    /// Status id.
    pub status_id: String,
    /// Status display name.
    pub status: String,
    /// Badge CSS class for the status.
    pub badge_class: String,
    /// Whether the row is in the bulk-action selection.
    pub selected: bool,
}

impl OrderRowView {
    /// Build a row from a domain order.
    #[must_use]
    pub fn from_order(order: &Order, selected: bool) -> Self {
        Self {
            id: order.id.as_str().to_string(),
            code: order.code.clone(),
            client: order.customer_name.clone(),
            deadline: order.deadline_display(),
            total: order.final_price.to_string(),
            total_raw: order.final_price.amount(),
            status_id: order.status.id.as_str().to_string(),
            status: order.status.name.clone(),
            badge_class: order.status.badge_class().to_string(),
            selected,
        }
    }
}

/// The grid response: one page of rows plus pagination counters.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    /// Visible rows.
    pub rows: Vec<OrderRowView>,
    /// Current page (1-based).
    pub page: usize,
    /// Page size.
    pub per_page: usize,
    /// Total pages under the current filters.
    pub total_pages: usize,
    /// Active sort key, as a query-parameter string.
    pub sort: &'static str,
    /// Active sort direction, as a query-parameter string.
    pub dir: &'static str,
    /// Rows matching the filters, before pagination.
    pub filtered: usize,
    /// Size of the full collection.
    pub total: usize,
    /// Number of selected ids.
    pub selected_count: usize,
    /// Last recorded failure message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl OrdersResponse {
    /// Render the visible page from the current state.
    #[must_use]
    pub fn from_state(state: &OrderListState) -> Self {
        let page = state.visible();
        let rows = page
            .orders
            .iter()
            .map(|o| OrderRowView::from_order(o, state.selected().contains(&o.id)))
            .collect();
        Self {
            rows,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            sort: state.params().sort_by.as_str(),
            dir: state.params().sort_dir.as_str(),
            filtered: page.filtered_len,
            total: state.orders().len(),
            selected_count: state.selected().len(),
            last_error: state.last_error().map(str::to_string),
        }
    }
}

/// A line item in the detail view.
#[derive(Debug, Serialize)]
pub struct OrderItemView {
    /// Product display name.
    pub product_name: String,
    /// Product category.
    pub category: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price, display format.
    pub unit_price: String,
    /// Line total, display format.
    pub line_total: String,
}

/// Full order detail, display-ready.
#[derive(Debug, Serialize)]
pub struct OrderDetailView {
    /// Order entity id.
    pub id: String,
    /// Order code.
    pub code: String,
    /// Customer display name.
    pub client: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub phone: String,
    /// Line items.
    pub items: Vec<OrderItemView>,
    /// Item subtotal, display format.
    pub total: String,
    /// Shipping fee, display format.
    pub shipping_fee: String,
    /// Loyalty points spent.
    pub points_used: i64,
    /// Final total, display format.
    pub final_total: String,
    /// Status display name.
    pub status: String,
    /// Badge CSS class for the status.
    pub badge_class: String,
    /// Payment method.
    pub payment_method: String,
    /// Payment status display text.
    pub payment_status: String,
    /// Delivery date, `dd/mm/yyyy`.
    pub deadline: String,
    /// Delivery time window.
    pub delivery_time: String,
    /// Customer note.
    pub note: String,
}

impl OrderDetailView {
    /// Build the detail view from a domain order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.as_str().to_string(),
            code: order.code.clone(),
            client: order.customer_name.clone(),
            email: order.customer_email.clone(),
            phone: order.customer_phone.clone(),
            items: order.items.iter().map(OrderItemView::from_item).collect(),
            total: order.total_price.to_string(),
            shipping_fee: order.shipping_fee.to_string(),
            points_used: order.points_used,
            final_total: order.final_price.to_string(),
            status: order.status.name.clone(),
            badge_class: status_badge(&order.status.name).to_string(),
            payment_method: order.payment_method.clone(),
            payment_status: order.payment_status.clone(),
            deadline: order.deadline_display(),
            delivery_time: order.delivery_time.clone(),
            note: order.note.clone(),
        }
    }
}

impl OrderItemView {
    fn from_item(item: &OrderItem) -> Self {
        Self {
            product_name: item.product_name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: cakeshop_core::Vnd::new(item.unit_price.amount() * item.quantity)
                .to_string(),
        }
    }
}
