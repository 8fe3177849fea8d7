//! Ledger services: the transaction store and the operations built on it.

mod account;
mod lifecycle;
mod sportsbook;
mod store;
mod wagering;

pub use account::AccountService;
pub use lifecycle::MatchLifecycle;
pub use sportsbook::Sportsbook;
pub use store::{LedgerPolicy, LedgerStore};
pub use wagering::WageringEngine;
