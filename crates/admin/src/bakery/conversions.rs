//! Normalization from raw backend payloads to domain types.
//!
//! The contract is totality: any raw order, including `{}`, becomes a fully
//! populated [`Order`]. Absent or malformed data degrades to defaults,
//! never to an error.

use chrono::{DateTime, Utc};

use cakeshop_core::{OrderId, OrderStatus, ProductId, StatusId, Vnd};

use super::payload::{ProductRef, RawOrder, RawOrderItem, StatusRef, UserRef};
use super::types::{Order, OrderItem};

/// Normalize a raw order into the domain shape.
#[must_use]
pub fn normalize_order(raw: RawOrder) -> Order {
    let now = Utc::now();
    let (customer_name, customer_email, customer_phone) = resolve_identity(&raw);

    let total_price = raw.total_price.unwrap_or_default();
    // The backend defines finalPrice identical to totalPrice; older records
    // omit it entirely.
    let final_price = raw.final_price.unwrap_or(total_price);

    Order {
        id: OrderId::new(raw.id.unwrap_or_default()),
        code: raw.code.unwrap_or_default(),
        customer_name,
        customer_email,
        customer_phone,
        items: raw.order_items.into_iter().map(normalize_item).collect(),
        total_price,
        shipping_fee: raw.shipping_fee.unwrap_or_default(),
        points_used: raw.point_used.unwrap_or_default(),
        final_price,
        status: normalize_status(raw.status),
        payment_method: raw.payment_method.unwrap_or_default(),
        payment_status: raw.payment_status.unwrap_or_default(),
        delivery_date: parse_date_or(raw.delivery_date.as_deref(), now),
        delivery_time: raw.delivery_time.unwrap_or_default(),
        note: raw.note.unwrap_or_default(),
        created_at: parse_date_or(raw.created_at.as_deref(), now),
        updated_at: parse_date_or(raw.updated_at.as_deref(), now),
    }
}

/// Resolve the customer identity through the fixed priority chain:
/// direct fields, then the registered-user reference, then the embedded
/// shipping address.
fn resolve_identity(raw: &RawOrder) -> (String, String, String) {
    let user = match &raw.user_id {
        Some(UserRef::Embedded(user)) => Some(user),
        _ => None,
    };
    let addr = raw.shipping_address.as_ref();

    let name = first_non_empty([
        raw.user_name.as_deref(),
        user.and_then(|u| u.user_name.as_deref()),
        addr.and_then(|a| a.full_name.as_deref()),
    ]);
    let email = first_non_empty([
        raw.user_email.as_deref(),
        user.and_then(|u| u.email.as_deref()),
        addr.and_then(|a| a.email.as_deref()),
    ]);
    let phone = first_non_empty([
        raw.user_phone.as_deref(),
        user.and_then(|u| u.phone_number.as_deref()),
        addr.and_then(|a| a.phone.as_deref()),
    ]);

    (name, email, phone)
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Statuses are always materialized as object references. A bare id ref
/// keeps an empty display name; a missing ref becomes the empty status.
fn normalize_status(status: Option<StatusRef>) -> OrderStatus {
    match status {
        Some(StatusRef::Embedded(raw)) => OrderStatus::new(
            StatusId::new(raw.id.unwrap_or_default()),
            raw.status_name.unwrap_or_default(),
        ),
        Some(StatusRef::Id(id)) => OrderStatus::new(StatusId::new(id), ""),
        None => OrderStatus::default(),
    }
}

fn normalize_item(raw: RawOrderItem) -> OrderItem {
    let (product_id, product_name, category) = match raw.product {
        Some(ProductRef::Embedded(product)) => (
            product.id.unwrap_or_default(),
            product.name.unwrap_or_default(),
            product.category.unwrap_or_default(),
        ),
        Some(ProductRef::Id(id)) => (id, String::new(), String::new()),
        None => (String::new(), String::new(), String::new()),
    };

    OrderItem {
        product_id: ProductId::new(product_id),
        product_name,
        category,
        quantity: raw.quantity.unwrap_or_default(),
        unit_price: raw.price.unwrap_or_default(),
    }
}

fn parse_date_or(value: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map_or(fallback, |d| d.with_timezone(&Utc))
}
