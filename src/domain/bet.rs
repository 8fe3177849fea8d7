//! Escrowed stakes recorded against a match.

use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::side::Side;

/// A single wager. Immutable once appended to its match.
///
/// The stake has already been debited from the bettor's balance by the time
/// a `Bet` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    user: UserId,
    amount: i64,
    side: Side,
}

impl Bet {
    /// Create a bet.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive. Callers validate stakes before
    /// escrowing them, so reaching this is a bug.
    #[must_use]
    pub fn new(user: UserId, amount: i64, side: Side) -> Self {
        assert!(amount > 0, "escrowed stake must be positive, got {amount}");
        Self { user, amount, side }
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}
