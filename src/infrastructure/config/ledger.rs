//! Ledger storage and policy configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::LedgerPolicy;
use crate::domain::DEFAULT_STARTING_BALANCE;

/// `[ledger]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Path of the JSON ledger document.
    pub data_file: String,
    /// Balance of users the ledger has never written.
    pub starting_balance: i64,
    /// Bound on each load or save, in milliseconds.
    pub commit_timeout_ms: u64,
    /// Rows shown by `top` when no count is given.
    pub leaderboard_size: usize,
}

impl LedgerConfig {
    #[must_use]
    pub fn policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            starting_balance: self.starting_balance,
            commit_timeout: Duration::from_millis(self.commit_timeout_ms),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: "bets_data.json".into(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            commit_timeout_ms: 5_000,
            leaderboard_size: 10,
        }
    }
}
