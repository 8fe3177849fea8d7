//! Wagerbook - a play-money wagering ledger.
//!
//! Users hold a virtual balance, administrators open two-sided matches with
//! fixed moneyline odds, users bet on a side while the match is open, and an
//! administrator resolves the match (paying winners) or cancels it
//! (refunding everyone).
//!
//! # Architecture
//!
//! - **`domain`** - Balances, matches, bets, odds conversion, settlement
//!   arithmetic. No I/O.
//! - **`application`** - [`LedgerStore`](application::LedgerStore), the single
//!   transaction choke point, and the services built on it:
//!   `MatchLifecycle`, `WageringEngine`, `AccountService`, behind the
//!   [`Sportsbook`](application::Sportsbook) facade.
//! - **`port`** / **`adapter`** - The `LedgerRepository` persistence seam
//!   with in-memory and JSON-file implementations.
//! - **`infrastructure`** - Configuration, logging, wiring.
//! - **`cli`** - Operator front end.
//!
//! Identity and permissions are the front end's job; the ledger trusts its
//! caller.
//!
//! Winning bets are paid `floor(stake * odds)` in exact decimal arithmetic,
//! which can pay one unit more than a binary floating-point product would
//! (see [`domain::odds`]).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wagerbook::adapter::store::MemoryRepository;
//! use wagerbook::application::{LedgerPolicy, Sportsbook};
//! use wagerbook::domain::{Side, UserId};
//!
//! # async fn demo() -> wagerbook::error::Result<()> {
//! let book = Sportsbook::open(Arc::new(MemoryRepository::new()), LedgerPolicy::default()).await?;
//! let m = book.create_match("X", "Y", 150, -200).await?;
//! book.place_bet(m.id, &UserId::new("42"), 100, Side::A).await?;
//! let settlement = book.resolve_match(m.id, Side::A).await?;
//! assert_eq!(settlement.total_paid(), 250);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
