//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - Repositories that fail or stall on demand.
//! - [`ledger`] - Ready-made in-memory stores and sportsbooks.

pub mod ledger;
pub mod store;
