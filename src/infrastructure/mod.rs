//! Infrastructure layer.
//!
//! Technical concerns that support the ledger without containing ledger
//! rules: configuration and wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;

pub use config::settings::Config;
