//! Date formatting helpers.

use chrono::{DateTime, Utc};

/// Format a timestamp in the vi-VN `dd/mm/yyyy` convention used across the
/// dashboard and CSV exports.
#[must_use]
pub fn format_date_vi(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}
