//! Settlement arithmetic and the receipts ledger operations return.

use serde::Serialize;

use super::error::DomainError;
use super::id::{MatchId, UserId};
use super::matchup::Match;
use super::odds::{winning_return, Odds};
use super::side::Side;

/// Money moved to one user by a settlement or refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub user_id: UserId,
    pub amount: i64,
}

/// Outcome of resolving a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub match_id: MatchId,
    pub winner: Side,
    pub winner_label: String,
    pub winner_moneyline: i64,
    pub odds: Odds,
    /// One entry per winning bet, in bet order.
    pub payouts: Vec<Transfer>,
    /// Stakes kept from losing bets.
    pub forfeited: i128,
}

impl Settlement {
    /// Sum of every payout.
    #[must_use]
    pub fn total_paid(&self) -> i128 {
        self.payouts.iter().map(|t| i128::from(t.amount)).sum()
    }
}

/// Compute the payouts for `winner` without applying them.
///
/// Each winning stake returns `floor(stake * odds)`; losing stakes are
/// forfeited.
pub fn settle(match_id: MatchId, m: &Match, winner: Side) -> Result<Settlement, DomainError> {
    let odds = m.odds(winner);
    let mut payouts = Vec::new();
    let mut forfeited = 0_i128;

    for bet in m.bets() {
        if bet.side() == winner {
            let amount =
                winning_return(bet.amount(), odds).ok_or_else(|| DomainError::BalanceOverflow {
                    user_id: bet.user().clone(),
                })?;
            payouts.push(Transfer {
                user_id: bet.user().clone(),
                amount,
            });
        } else {
            forfeited += i128::from(bet.amount());
        }
    }

    Ok(Settlement {
        match_id,
        winner,
        winner_label: m.player(winner).to_string(),
        winner_moneyline: m.moneyline(winner),
        odds,
        payouts,
        forfeited,
    })
}

/// Full refund of every stake on a match, in bet order.
#[must_use]
pub fn refunds(m: &Match) -> Vec<Transfer> {
    m.bets()
        .iter()
        .map(|bet| Transfer {
            user_id: bet.user().clone(),
            amount: bet.amount(),
        })
        .collect()
}

/// Outcome of cancelling a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cancellation {
    pub match_id: MatchId,
    pub refunds: Vec<Transfer>,
}

impl Cancellation {
    #[must_use]
    pub fn total_refunded(&self) -> i128 {
        self.refunds.iter().map(|t| i128::from(t.amount)).sum()
    }
}

/// Confirmation of an accepted bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetReceipt {
    pub match_id: MatchId,
    pub user_id: UserId,
    pub amount: i64,
    pub side: Side,
    /// Label of the competitor backed.
    pub backing: String,
    pub balance_after: i64,
}

/// One leaderboard row. Ranks start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub user_id: UserId,
    pub balance: i64,
}
