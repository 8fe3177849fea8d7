//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod store;

pub use store::LedgerRepository;
