//! Facade over the ledger services.
//!
//! This is the whole surface a front end needs: every call is either one
//! store transaction or one snapshot read.

use std::sync::Arc;

use super::account::AccountService;
use super::lifecycle::MatchLifecycle;
use super::store::{LedgerPolicy, LedgerStore};
use super::wagering::WageringEngine;
use crate::domain::{
    BetReceipt, Cancellation, MatchId, MatchSummary, Settlement, Side, Standing, UserId,
};
use crate::error::Result;
use crate::port::outbound::LedgerRepository;

/// The wagering ledger.
#[derive(Clone)]
pub struct Sportsbook {
    store: Arc<LedgerStore>,
    matches: MatchLifecycle,
    wagers: WageringEngine,
    accounts: AccountService,
}

impl Sportsbook {
    #[must_use]
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self {
            matches: MatchLifecycle::new(store.clone()),
            wagers: WageringEngine::new(store.clone()),
            accounts: AccountService::new(store.clone()),
            store,
        }
    }

    /// Load the ledger from `repository`.
    pub async fn open(repository: Arc<dyn LedgerRepository>, policy: LedgerPolicy) -> Result<Self> {
        let store = LedgerStore::open(repository, policy).await?;
        Ok(Self::new(Arc::new(store)))
    }

    #[must_use]
    pub fn store(&self) -> &Arc<LedgerStore> {
        &self.store
    }

    pub async fn create_match(
        &self,
        player_a: &str,
        player_b: &str,
        moneyline_a: i64,
        moneyline_b: i64,
    ) -> Result<MatchSummary> {
        self.matches
            .create_match(player_a, player_b, moneyline_a, moneyline_b)
            .await
    }

    pub async fn place_bet(
        &self,
        match_id: MatchId,
        user: &UserId,
        amount: i64,
        side: Side,
    ) -> Result<BetReceipt> {
        self.wagers.place_bet(match_id, user, amount, side).await
    }

    pub async fn resolve_match(&self, match_id: MatchId, winner: Side) -> Result<Settlement> {
        self.matches.resolve_match(match_id, winner).await
    }

    pub async fn cancel_match(&self, match_id: MatchId) -> Result<Cancellation> {
        self.matches.cancel_match(match_id).await
    }

    #[must_use]
    pub fn list_open_matches(&self) -> Vec<MatchSummary> {
        self.matches.list_open_matches()
    }

    pub fn match_summary(&self, match_id: MatchId) -> Result<MatchSummary> {
        self.matches.match_summary(match_id)
    }

    #[must_use]
    pub fn balance(&self, user: &UserId) -> i64 {
        self.accounts.balance(user)
    }

    pub async fn set_balance(&self, user: &UserId, amount: i64) -> Result<()> {
        self.accounts.set_balance(user, amount).await
    }

    pub async fn reset_all_balances(&self) -> Result<usize> {
        self.accounts.reset_all_balances().await
    }

    #[must_use]
    pub fn top(&self, n: usize) -> Vec<Standing> {
        self.accounts.top(n)
    }
}
