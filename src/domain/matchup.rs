//! Two-sided matches with fixed moneyline odds.

use serde::{Deserialize, Serialize};

use super::bet::Bet;
use super::error::DomainError;
use super::id::MatchId;
use super::odds::{to_decimal_odds, Odds};
use super::side::Side;

/// A match between two competitors.
///
/// Odds are derived from the moneylines when the match is created and never
/// recomputed. The bet list is append-only while the match is open;
/// resolution freezes it.
///
/// Field names follow the persisted document, which other tooling reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "playerA")]
    player_a: String,
    #[serde(rename = "playerB")]
    player_b: String,
    #[serde(rename = "moneylineA")]
    moneyline_a: i64,
    #[serde(rename = "moneylineB")]
    moneyline_b: i64,
    #[serde(rename = "oddsA", with = "rust_decimal::serde::float")]
    odds_a: Odds,
    #[serde(rename = "oddsB", with = "rust_decimal::serde::float")]
    odds_b: Odds,
    #[serde(default)]
    bets: Vec<Bet>,
    #[serde(default)]
    resolved: bool,
    #[serde(default)]
    winner: Option<Side>,
}

impl Match {
    /// Open a new match, deriving both odds.
    ///
    /// Fails with [`DomainError::InvalidOdds`] if either moneyline is zero.
    pub fn try_new(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        moneyline_a: i64,
        moneyline_b: i64,
    ) -> Result<Self, DomainError> {
        let odds_a = to_decimal_odds(moneyline_a)?;
        let odds_b = to_decimal_odds(moneyline_b)?;

        Ok(Self {
            player_a: player_a.into(),
            player_b: player_b.into(),
            moneyline_a,
            moneyline_b,
            odds_a,
            odds_b,
            bets: Vec::new(),
            resolved: false,
            winner: None,
        })
    }

    /// Label of the competitor on `side`.
    #[must_use]
    pub fn player(&self, side: Side) -> &str {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    #[must_use]
    pub fn moneyline(&self, side: Side) -> i64 {
        match side {
            Side::A => self.moneyline_a,
            Side::B => self.moneyline_b,
        }
    }

    /// Decimal odds fixed at creation.
    #[must_use]
    pub fn odds(&self, side: Side) -> Odds {
        match side {
            Side::A => self.odds_a,
            Side::B => self.odds_b,
        }
    }

    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Sum of all escrowed stakes.
    ///
    /// Widened to `i128`: each stake fits a balance, their sum need not.
    #[must_use]
    pub fn total_staked(&self) -> i128 {
        self.bets.iter().map(|bet| i128::from(bet.amount())).sum()
    }

    /// Append an escrowed bet. The caller has checked the match is open.
    pub(crate) fn push_bet(&mut self, bet: Bet) {
        debug_assert!(!self.resolved, "bet appended to a resolved match");
        self.bets.push(bet);
    }

    /// Freeze the match with its winner.
    ///
    /// # Panics
    ///
    /// Panics if the match was already resolved.
    pub(crate) fn mark_resolved(&mut self, winner: Side) {
        assert!(!self.resolved, "match resolved twice");
        self.resolved = true;
        self.winner = Some(winner);
    }

    /// Check the `resolved` flag agrees with `winner`.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        match (self.resolved, self.winner) {
            (true, None) => return Err("resolved without a winner".to_string()),
            (false, Some(side)) => return Err(format!("open but winner set to {side}")),
            _ => {}
        }
        if let Some(bet) = self.bets.iter().find(|bet| bet.amount() <= 0) {
            return Err(format!(
                "non-positive stake {} from {}",
                bet.amount(),
                bet.user()
            ));
        }
        Ok(())
    }

    /// Read-only view of this match under `id`.
    #[must_use]
    pub fn summary(&self, id: MatchId) -> MatchSummary {
        MatchSummary {
            id,
            player_a: self.player_a.clone(),
            player_b: self.player_b.clone(),
            moneyline_a: self.moneyline_a,
            moneyline_b: self.moneyline_b,
            odds_a: self.odds_a,
            odds_b: self.odds_b,
            bet_count: self.bets.len(),
            total_staked: self.total_staked(),
            winner: self.winner,
        }
    }
}

/// Snapshot of a match handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub player_a: String,
    pub player_b: String,
    pub moneyline_a: i64,
    pub moneyline_b: i64,
    pub odds_a: Odds,
    pub odds_b: Odds,
    pub bet_count: usize,
    pub total_staked: i128,
    /// Set once the match is resolved.
    pub winner: Option<Side>,
}
