//! Cakeshop Core - Shared types library.
//!
//! This crate provides common types used across the Cakeshop admin
//! components:
//! - `admin` - Internal administration backend for the bakery dashboard
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, VND prices, and order
//!   statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
