//! The ledger root: every balance, every live match, the id counter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::accounts::Accounts;
use super::error::DomainError;
use super::id::{MatchId, UserId};
use super::matchup::Match;

/// Balance of any user the ledger has never written.
pub const DEFAULT_STARTING_BALANCE: i64 = 1000;

/// The single unit of atomicity.
///
/// Transactions mutate a private copy and the store swaps it in wholesale,
/// so nothing outside a transaction sees a half-applied root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRoot {
    #[serde(default)]
    pub users: Accounts,
    #[serde(default)]
    pub matches: BTreeMap<MatchId, Match>,
    #[serde(alias = "nextMatchId", default = "first_match_id")]
    pub next_match_id: MatchId,
}

fn first_match_id() -> MatchId {
    MatchId::FIRST
}

impl Default for LedgerRoot {
    fn default() -> Self {
        Self {
            users: Accounts::new(),
            matches: BTreeMap::new(),
            next_match_id: MatchId::FIRST,
        }
    }
}

impl LedgerRoot {
    /// `users[user] ?? starting_balance`. Pure; never materializes the user.
    #[must_use]
    pub fn balance_of(&self, user: &UserId, starting_balance: i64) -> i64 {
        self.users.balance_or(user, starting_balance)
    }

    /// Add `amount` to a balance, materializing the user if needed.
    ///
    /// Returns the new balance.
    pub fn credit(
        &mut self,
        user: &UserId,
        amount: i64,
        starting_balance: i64,
    ) -> Result<i64, DomainError> {
        let balance = self
            .balance_of(user, starting_balance)
            .checked_add(amount)
            .ok_or_else(|| DomainError::BalanceOverflow {
                user_id: user.clone(),
            })?;
        self.users.set(user.clone(), balance);
        Ok(balance)
    }

    /// Take `amount` out of a balance if it is covered.
    ///
    /// Returns the new balance.
    pub fn debit(
        &mut self,
        user: &UserId,
        amount: i64,
        starting_balance: i64,
    ) -> Result<i64, DomainError> {
        let balance = self.balance_of(user, starting_balance);
        if amount > balance {
            return Err(DomainError::InsufficientFunds {
                user_id: user.clone(),
                balance,
                requested: amount,
            });
        }
        let remaining = balance - amount;
        self.users.set(user.clone(), remaining);
        Ok(remaining)
    }

    pub fn get_match(&self, id: MatchId) -> Result<&Match, DomainError> {
        self.matches
            .get(&id)
            .ok_or(DomainError::MatchNotFound { match_id: id })
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Result<&mut Match, DomainError> {
        self.matches
            .get_mut(&id)
            .ok_or(DomainError::MatchNotFound { match_id: id })
    }

    /// Like [`get_match`](Self::get_match) but also rejects resolved matches.
    pub fn open_match(&self, id: MatchId) -> Result<&Match, DomainError> {
        let found = self.get_match(id)?;
        if found.is_resolved() {
            return Err(DomainError::AlreadyResolved { match_id: id });
        }
        Ok(found)
    }

    /// Like [`get_match_mut`](Self::get_match_mut) but also rejects resolved matches.
    pub fn open_match_mut(&mut self, id: MatchId) -> Result<&mut Match, DomainError> {
        let found = self.get_match_mut(id)?;
        if found.is_resolved() {
            return Err(DomainError::AlreadyResolved { match_id: id });
        }
        Ok(found)
    }

    /// Store a new match under the next id and advance the counter.
    ///
    /// Fails with [`DomainError::MatchIdsExhausted`] rather than reuse an id.
    pub fn insert_match(&mut self, new_match: Match) -> Result<MatchId, DomainError> {
        let id = self.next_match_id;
        self.next_match_id = id
            .next()
            .ok_or(DomainError::MatchIdsExhausted { last: id })?;
        self.matches.insert(id, new_match);
        Ok(id)
    }

    /// Sum of every stake still escrowed in an open match.
    #[must_use]
    pub fn escrowed(&self) -> i128 {
        self.matches
            .values()
            .filter(|m| !m.is_resolved())
            .map(Match::total_staked)
            .sum()
    }

    /// Structural checks applied to a freshly loaded document.
    pub fn validate(&self) -> Result<(), String> {
        for (id, m) in &self.matches {
            m.check_consistency()
                .map_err(|reason| format!("match {id}: {reason}"))?;
            if *id >= self.next_match_id {
                return Err(format!(
                    "match {id} is not below next_match_id {}",
                    self.next_match_id
                ));
            }
        }
        Ok(())
    }
}
