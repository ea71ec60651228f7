//! Wire shapes for the bakery backend API.
//!
//! The backend is loose about shapes: lists arrive bare or wrapped in a
//! `{status, data, message}` envelope, references arrive as bare id strings
//! or populated objects, and prices arrive as numbers or numeric strings.
//! Each known variation is modeled as an explicit untagged sum type here so
//! the rest of the crate never chains fallbacks at call sites.

use serde::Deserialize;

use cakeshop_core::Vnd;

/// Envelope `status` value the backend uses as its success sentinel.
pub const STATUS_OK: &str = "OK";

/// Mutation response envelope: `{status, data?, message?}`.
///
/// `status` is required here - mutation endpoints always send it.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationEnvelope<T> {
    /// Success sentinel; anything other than `"OK"` is a server-reported
    /// failure.
    pub status: String,
    /// Payload on success.
    #[serde(default = "none")]
    pub data: Option<T>,
    /// Human-readable failure message.
    #[serde(default)]
    pub message: Option<String>,
}

// `#[serde(default)]` on `Option<T>` would require `T: Default`.
const fn none<T>() -> Option<T> {
    None
}

impl<T> MutationEnvelope<T> {
    /// Whether the backend reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Fetch-all response: bare array or `data`-wrapped array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrdersPayload {
    /// Bare JSON array of raw orders.
    Bare(Vec<RawOrder>),
    /// `{data: [...]}` envelope.
    Enveloped {
        /// Wrapped order list.
        data: Vec<RawOrder>,
    },
}

impl OrdersPayload {
    /// Unwrap to the raw order list regardless of shape.
    #[must_use]
    pub fn into_orders(self) -> Vec<RawOrder> {
        match self {
            Self::Bare(orders) | Self::Enveloped { data: orders } => orders,
        }
    }
}

/// Fetch-by-id response: `data`-wrapped or bare raw order.
///
/// The enveloped variant must come first: a raw order never carries a
/// top-level `data` key, so the two shapes stay unambiguous.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderPayload {
    /// `{data: {...}}` envelope.
    Enveloped {
        /// Wrapped order.
        data: RawOrder,
    },
    /// Bare raw order object.
    Bare(RawOrder),
}

impl OrderPayload {
    /// Unwrap to the raw order regardless of shape.
    #[must_use]
    pub fn into_order(self) -> RawOrder {
        match self {
            Self::Enveloped { data: order } | Self::Bare(order) => order,
        }
    }
}

/// Buyer reference: registered-user object or bare id string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    /// Populated user object.
    Embedded(RawUser),
    /// Bare user id.
    Id(String),
}

/// Embedded registered-user record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    /// User id.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Account display name.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Account phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Status reference: populated status object or bare id string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatusRef {
    /// Populated status object.
    Embedded(RawStatus),
    /// Bare status id.
    Id(String),
}

/// Embedded status record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    /// Status id.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Vietnamese display name.
    #[serde(default)]
    pub status_name: Option<String>,
}

/// Product reference inside a line item: object or bare id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    /// Populated product object.
    Embedded(RawProduct),
    /// Bare product id.
    Id(String),
}

/// Embedded product record on a line item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Product id.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Product display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Product category.
    #[serde(default)]
    pub category: Option<String>,
}

/// Raw line item as the backend sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderItem {
    /// Product reference.
    #[serde(default)]
    pub product: Option<ProductRef>,
    /// Quantity ordered.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Unit price.
    #[serde(default)]
    pub price: Option<Vnd>,
}

/// Shipping address embedded on an order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShippingAddress {
    /// Recipient full name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Recipient email.
    #[serde(default)]
    pub email: Option<String>,
    /// Recipient phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address (unused by the dashboard grid, kept for detail views).
    #[serde(default)]
    pub address: Option<String>,
}

/// A raw order exactly as the backend serializes it.
///
/// Every field is optional; normalization turns this into a fully populated
/// [`super::types::Order`] without ever failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    /// Order id.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Human-readable order code.
    #[serde(default)]
    pub code: Option<String>,
    /// Direct customer name (takes priority over the user reference).
    #[serde(default)]
    pub user_name: Option<String>,
    /// Direct customer email.
    #[serde(default)]
    pub user_email: Option<String>,
    /// Direct customer phone.
    #[serde(default)]
    pub user_phone: Option<String>,
    /// Registered-user reference.
    #[serde(default)]
    pub user_id: Option<UserRef>,
    /// Embedded shipping identity (last identity fallback).
    #[serde(default)]
    pub shipping_address: Option<RawShippingAddress>,
    /// Line items.
    #[serde(default)]
    pub order_items: Vec<RawOrderItem>,
    /// Item subtotal.
    #[serde(default)]
    pub total_price: Option<Vnd>,
    /// Shipping fee.
    #[serde(default)]
    pub shipping_fee: Option<Vnd>,
    /// Loyalty points spent.
    #[serde(default)]
    pub point_used: Option<i64>,
    /// Final total; falls back to `total_price` when absent.
    #[serde(default)]
    pub final_price: Option<Vnd>,
    /// Workflow status reference.
    #[serde(default)]
    pub status: Option<StatusRef>,
    /// Payment method.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Payment status display text.
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Requested delivery date (RFC 3339).
    #[serde(default)]
    pub delivery_date: Option<String>,
    /// Requested delivery time window.
    #[serde(default)]
    pub delivery_time: Option<String>,
    /// Customer note.
    #[serde(default)]
    pub note: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_payload_accepts_bare_array_and_envelope() {
        let bare: OrdersPayload = serde_json::from_str(r#"[{"_id":"1"}]"#).expect("bare");
        assert_eq!(bare.into_orders().len(), 1);

        let wrapped: OrdersPayload =
            serde_json::from_str(r#"{"status":"OK","data":[{"_id":"1"},{"_id":"2"}]}"#)
                .expect("wrapped");
        assert_eq!(wrapped.into_orders().len(), 2);
    }

    #[test]
    fn order_payload_distinguishes_envelope_from_bare_order() {
        let wrapped: OrderPayload =
            serde_json::from_str(r#"{"data":{"_id":"o1","code":"DH-1"}}"#).expect("wrapped");
        assert_eq!(wrapped.into_order().id.as_deref(), Some("o1"));

        // A bare order has a `status` field of its own; it must not be
        // mistaken for an envelope.
        let bare: OrderPayload =
            serde_json::from_str(r#"{"_id":"o2","status":{"_id":"s1","statusName":"đã giao"}}"#)
                .expect("bare");
        let raw = bare.into_order();
        assert_eq!(raw.id.as_deref(), Some("o2"));
        assert!(matches!(raw.status, Some(StatusRef::Embedded(_))));
    }

    #[test]
    fn user_ref_accepts_id_and_object() {
        let id: UserRef = serde_json::from_str(r#""u42""#).expect("id");
        assert!(matches!(id, UserRef::Id(ref s) if s == "u42"));

        let obj: UserRef =
            serde_json::from_str(r#"{"_id":"u42","userName":"Lan","email":"lan@x.vn"}"#)
                .expect("object");
        assert!(matches!(obj, UserRef::Embedded(_)));
    }

    #[test]
    fn empty_object_is_a_valid_raw_order() {
        let raw: RawOrder = serde_json::from_str("{}").expect("empty");
        assert!(raw.id.is_none());
        assert!(raw.order_items.is_empty());
    }

    #[test]
    fn mutation_envelope_checks_the_sentinel() {
        let ok: MutationEnvelope<RawOrder> =
            serde_json::from_str(r#"{"status":"OK","data":{"_id":"1"}}"#).expect("ok");
        assert!(ok.is_ok());

        let failed: MutationEnvelope<RawOrder> =
            serde_json::from_str(r#"{"status":"ERR","message":"không tìm thấy đơn hàng"}"#)
                .expect("failed");
        assert!(!failed.is_ok());
        assert_eq!(failed.message.as_deref(), Some("không tìm thấy đơn hàng"));
    }
}
