//! Balance queries, administrative overrides and the leaderboard.

use std::sync::Arc;

use tracing::{info, warn};

use super::store::LedgerStore;
use crate::domain::{Standing, UserId};
use crate::error::Result;

/// Balance reads and administrative balance writes.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<LedgerStore>,
}

impl AccountService {
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Current balance, or the starting balance for an unseen user.
    ///
    /// Never records the user.
    #[must_use]
    pub fn balance(&self, user: &UserId) -> i64 {
        self.store
            .snapshot()
            .balance_of(user, self.store.starting_balance())
    }

    /// Overwrite a balance unconditionally. Negative values are accepted.
    pub async fn set_balance(&self, user: &UserId, amount: i64) -> Result<()> {
        let target = user.clone();
        let previous = self
            .store
            .transact("set_balance", move |root| {
                let previous = root.users.get(&target);
                root.users.set(target, amount);
                Ok(previous)
            })
            .await?;

        if amount < 0 {
            warn!(user_id = %user, amount, "Balance set below zero");
        }
        info!(user_id = %user, amount, previous = ?previous, "Balance overridden");
        Ok(())
    }

    /// Set every recorded balance back to the starting balance.
    ///
    /// Returns how many users were reset.
    pub async fn reset_all_balances(&self) -> Result<usize> {
        let starting_balance = self.store.starting_balance();
        let reset = self
            .store
            .transact("reset_all_balances", move |root| {
                root.users.reset_all(starting_balance);
                Ok(root.users.len())
            })
            .await?;

        info!(users = reset, balance = starting_balance, "Balances reset");
        Ok(reset)
    }

    /// The `n` richest recorded users.
    ///
    /// Sorted by balance descending; equal balances keep the order in which
    /// users were first recorded.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<Standing> {
        let root = self.store.snapshot();
        let mut rows: Vec<_> = root.users.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        rows.into_iter()
            .take(n)
            .enumerate()
            .map(|(i, (user, balance))| Standing {
                rank: i + 1,
                user_id: user.clone(),
                balance,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::ledger::memory_store;

    #[tokio::test]
    async fn balance_query_does_not_record_user() {
        let store = memory_store().await;
        let accounts = AccountService::new(store.clone());

        assert_eq!(accounts.balance(&UserId::new("new")), 1000);
        assert!(store.snapshot().users.is_empty());
    }

    #[tokio::test]
    async fn set_balance_accepts_negative_values() {
        let accounts = AccountService::new(memory_store().await);
        let user = UserId::new("1");

        accounts.set_balance(&user, -50).await.unwrap();
        assert_eq!(accounts.balance(&user), -50);
    }

    #[tokio::test]
    async fn reset_restores_known_users_only() {
        let store = memory_store().await;
        let accounts = AccountService::new(store.clone());
        accounts.set_balance(&UserId::new("1"), 5).await.unwrap();
        accounts.set_balance(&UserId::new("2"), 7_000).await.unwrap();

        assert_eq!(accounts.reset_all_balances().await.unwrap(), 2);
        assert_eq!(accounts.balance(&UserId::new("1")), 1000);
        assert_eq!(accounts.balance(&UserId::new("2")), 1000);
        assert_eq!(store.snapshot().users.len(), 2);
    }

    #[tokio::test]
    async fn top_breaks_ties_by_first_seen() {
        let accounts = AccountService::new(memory_store().await);
        for (user, amount) in [("c", 500), ("a", 900), ("b", 500), ("d", 100)] {
            accounts.set_balance(&UserId::new(user), amount).await.unwrap();
        }

        let top = accounts.top(3);
        let rows: Vec<_> = top
            .iter()
            .map(|s| (s.rank, s.user_id.as_str(), s.balance))
            .collect();
        assert_eq!(rows, vec![(1, "a", 900), (2, "c", 500), (3, "b", 500)]);
    }

    #[tokio::test]
    async fn top_with_more_slots_than_users() {
        let accounts = AccountService::new(memory_store().await);
        accounts.set_balance(&UserId::new("1"), 1).await.unwrap();
        assert_eq!(accounts.top(10).len(), 1);
        assert!(accounts.top(0).is_empty());
    }
}
