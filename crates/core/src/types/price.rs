//! VND price representation and formatting.
//!
//! The bakery backend prices everything in whole đồng; there are no
//! fractional amounts, so a plain `i64` is the honest representation.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An amount of Vietnamese đồng.
///
/// Displays in the vi-VN convention with `.` thousands grouping and a
/// trailing `₫` sign: `Vnd(1_500_000)` renders as `1.500.000 ₫`.
///
/// Deserializes leniently: the backend emits prices as JSON numbers in some
/// endpoints and as numeric strings in others, and floats occasionally show
/// up after server-side arithmetic. All of those collapse to whole đồng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Vnd(i64);

impl Vnd {
    /// Create a new amount from whole đồng.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero đồng.
    pub const ZERO: Self = Self(0);

    /// Get the underlying amount in whole đồng.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }
}

impl From<i64> for Vnd {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Vnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if negative {
            write!(f, "-{grouped} ₫")
        } else {
            write!(f, "{grouped} ₫")
        }
    }
}

impl<'de> Deserialize<'de> for Vnd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Number, numeric string, or null all occur in the wild.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self(coerce_amount(&value)))
    }
}

/// Best-effort coercion of a JSON value to whole đồng; unusable input is 0.
#[must_use]
pub fn coerce_amount(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f.round() as i64))
            .unwrap_or(0),
        _ => 0,
    }
}
