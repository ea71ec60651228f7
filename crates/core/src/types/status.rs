//! Order workflow status.
//!
//! Statuses live server-side as their own entities; orders reference them
//! by id and carry the Vietnamese display name (e.g. "đang làm", "đã giao").

use serde::{Deserialize, Serialize};

use super::id::StatusId;

/// A materialized order status reference.
///
/// Always an object, never a bare id string: payloads that only carry the
/// id are materialized with an empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderStatus {
    /// Status entity id.
    pub id: StatusId,
    /// Vietnamese display name.
    pub name: String,
}

impl OrderStatus {
    /// Create a status reference.
    #[must_use]
    pub fn new(id: impl Into<StatusId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Badge class for this status, for the dashboard grid.
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        status_badge(&self.name)
    }
}

/// Map a Vietnamese status name to a semantic badge class.
///
/// Unrecognized names fall into the neutral bucket.
#[must_use]
pub fn status_badge(name: &str) -> &'static str {
    match name.trim().to_lowercase().as_str() {
        "đã giao" | "hoàn thành" => "badge badge-success",
        "đang làm" | "đã xác nhận" => "badge badge-info",
        "đang giao" => "badge badge-shipping",
        "chờ xác nhận" => "badge badge-warning",
        "đã hủy" => "badge badge-destructive",
        _ => "badge badge-neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_pick_their_bucket() {
        assert_eq!(status_badge("đã giao"), "badge badge-success");
        assert_eq!(status_badge("đang làm"), "badge badge-info");
        assert_eq!(status_badge("đang giao"), "badge badge-shipping");
        assert_eq!(status_badge("chờ xác nhận"), "badge badge-warning");
        assert_eq!(status_badge("đã hủy"), "badge badge-destructive");
    }

    #[test]
    fn unknown_names_are_neutral() {
        assert_eq!(status_badge("mystery state"), "badge badge-neutral");
        assert_eq!(status_badge(""), "badge badge-neutral");
    }

    #[test]
    fn matching_ignores_case_and_padding() {
        assert_eq!(status_badge("  Đã Giao  "), "badge badge-success");
    }
}
