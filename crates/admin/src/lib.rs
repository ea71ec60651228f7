//! Cakeshop admin library.
//!
//! Backend-for-frontend serving the bakery's admin dashboard: it fetches
//! orders from the bakery backend API, holds them in an in-memory store
//! with selection and grid state, and exposes JSON endpoints plus CSV
//! export for the order management screen.
//!
//! Exposed as a library so the store and view pipeline can be tested and
//! reused without the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bakery;
pub mod config;
pub mod error;
pub mod export;
pub mod routes;
pub mod state;
pub mod store;
