//! Validation errors raised by ledger operations.
//!
//! Every variant is local and recoverable: the operation that produced it
//! left the ledger untouched, and retrying without changing the input will
//! fail the same way.
//!
//! # Examples
//!
//! ```
//! use wagerbook::domain::error::DomainError;
//! use wagerbook::domain::odds::to_decimal_odds;
//!
//! let result = to_decimal_odds(0);
//! assert!(matches!(result, Err(DomainError::InvalidOdds { moneyline: 0 })));
//! ```

use thiserror::Error;

use super::id::{MatchId, UserId};

/// Errors that occur when a ledger rule is violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Moneylines must be non-zero.
    #[error("invalid moneyline {moneyline}: must be non-zero")]
    InvalidOdds {
        /// The rejected moneyline.
        moneyline: i64,
    },

    /// Stakes must be strictly positive.
    #[error("invalid amount {amount}: must be positive")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// Sides are `a` or `b`.
    #[error("invalid side '{side}': choose 'a' or 'b'")]
    InvalidSide {
        /// The text that failed to parse.
        side: String,
    },

    #[error("match {match_id} not found")]
    MatchNotFound { match_id: MatchId },

    #[error("match {match_id} has already been resolved")]
    AlreadyResolved { match_id: MatchId },

    #[error("insufficient funds for {user_id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        user_id: UserId,
        balance: i64,
        requested: i64,
    },

    /// The match id counter has reached its maximum.
    #[error("no match ids left after {last}")]
    MatchIdsExhausted { last: MatchId },

    /// A credit would push a balance outside the representable range.
    #[error("balance of {user_id} would overflow")]
    BalanceOverflow { user_id: UserId },
}
