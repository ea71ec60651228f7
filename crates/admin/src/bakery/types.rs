//! Order domain types for the bakery backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cakeshop_core::{OrderId, OrderStatus, ProductId, Vnd, format_date_vi};

/// A line item in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product entity id.
    pub product_id: ProductId,
    /// Product display name.
    pub product_name: String,
    /// Product category (e.g. "bánh kem", "bánh mì").
    pub category: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Price per unit.
    pub unit_price: Vnd,
}

/// A customer purchase transaction, fully materialized.
///
/// Every field is populated at normalization time; the dashboard never has
/// to reason about missing data. See [`super::conversions::normalize_order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order entity id.
    pub id: OrderId,
    /// Human-readable order code (e.g. "DH-20250307-0012").
    pub code: String,
    /// Customer display name, resolved through the identity fallback chain.
    pub customer_name: String,
    /// Customer email, same fallback chain.
    pub customer_email: String,
    /// Customer phone, same fallback chain.
    pub customer_phone: String,
    /// Line items. An order with no items is not considered valid.
    pub items: Vec<OrderItem>,
    /// Item subtotal.
    pub total_price: Vnd,
    /// Shipping fee.
    pub shipping_fee: Vnd,
    /// Loyalty points spent on this order.
    pub points_used: i64,
    /// Final total. Defined identical to `total_price` by the backend; kept
    /// as its own field because it is the sort/filter/display key.
    pub final_price: Vnd,
    /// Workflow status, always materialized as an object reference.
    pub status: OrderStatus,
    /// Payment method (e.g. "COD", "VNPay").
    pub payment_method: String,
    /// Payment status display text.
    pub payment_status: String,
    /// Requested delivery date.
    pub delivery_date: DateTime<Utc>,
    /// Requested delivery time window (free text).
    pub delivery_time: String,
    /// Free-text note from the customer.
    pub note: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// An order must carry at least one line item to be considered valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.items.is_empty()
    }

    /// Delivery date in the dashboard's `dd/mm/yyyy` convention.
    #[must_use]
    pub fn deadline_display(&self) -> String {
        format_date_vi(&self.delivery_date)
    }

    /// Total line item quantity across the order.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
