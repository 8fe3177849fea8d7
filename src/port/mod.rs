//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the ledger meets the outside world. Adapters in
//! [`crate::adapter`] implement them.
//!
//! # Architecture
//!
//! ```text
//!        front end (cli, chat bot, http)
//!                      │
//!                      ▼
//!         ┌─────────────────────────┐
//!         │  Application (services) │
//!         │  Domain (rules)         │
//!         └────────────┬────────────┘
//!                      │ LedgerRepository
//!                      ▼
//!               ┌─────────────┐
//!               │   Store     │
//!               │   Adapter   │
//!               └─────────────┘
//! ```

pub mod outbound;
