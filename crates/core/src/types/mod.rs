//! Core types for Cakeshop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod date;
pub mod id;
pub mod price;
pub mod status;

pub use date::format_date_vi;
pub use id::*;
pub use price::Vnd;
pub use status::{OrderStatus, status_badge};
