//! Ledger domain: balances, matches, bets, odds and settlement arithmetic.
//!
//! Nothing here performs I/O or locking; the application layer applies
//! these rules inside store transactions.

pub mod accounts;
pub mod bet;
pub mod error;
pub mod id;
pub mod ledger;
pub mod matchup;
pub mod odds;
pub mod settlement;
pub mod side;

pub use accounts::Accounts;
pub use bet::Bet;
pub use error::DomainError;
pub use id::{MatchId, UserId};
pub use ledger::{LedgerRoot, DEFAULT_STARTING_BALANCE};
pub use matchup::{Match, MatchSummary};
pub use odds::{to_decimal_odds, winning_return, Odds};
pub use settlement::{BetReceipt, Cancellation, Settlement, Standing, Transfer};
pub use side::Side;
