//! Ledger fixtures.

use std::sync::Arc;

use crate::adapter::store::MemoryRepository;
use crate::application::{LedgerPolicy, LedgerStore, Sportsbook};
use crate::port::outbound::LedgerRepository;

/// Empty in-memory store with the default policy.
///
/// # Panics
///
/// Never in practice; the memory repository cannot fail to load.
pub async fn memory_store() -> Arc<LedgerStore> {
    let repo: Arc<dyn LedgerRepository> = Arc::new(MemoryRepository::new());
    Arc::new(
        LedgerStore::open(repo, LedgerPolicy::default())
            .await
            .expect("memory repository loads"),
    )
}

/// Empty in-memory sportsbook with the default policy.
pub async fn memory_sportsbook() -> Sportsbook {
    Sportsbook::new(memory_store().await)
}

/// Sportsbook backed by `repository`, starting from whatever it holds.
///
/// # Panics
///
/// Panics if the repository fails to load.
pub async fn sportsbook_with(repository: Arc<dyn LedgerRepository>) -> Sportsbook {
    Sportsbook::open(repository, LedgerPolicy::default())
        .await
        .expect("repository loads")
}
