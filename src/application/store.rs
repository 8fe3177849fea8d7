//! The ledger store: one committed root, one writer at a time.
//!
//! Every mutation runs through [`LedgerStore::transact`]: the writer lock is
//! taken, the closure edits a private copy of the root, the copy is saved
//! through the repository within the commit budget, and only then replaces
//! the committed root. A rejected closure or a failed save leaves the
//! committed root exactly as it was.
//!
//! The save and the swap run on their own task holding the writer lock. A
//! caller that stops waiting does not stop them, so the saved document and
//! the committed root never disagree.
//!
//! Readers never take the writer lock. [`LedgerStore::snapshot`] hands out
//! the committed root behind an `Arc`, so concurrent reads see a consistent
//! state and never block on persistence.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{DomainError, LedgerRoot, DEFAULT_STARTING_BALANCE};
use crate::error::{PersistenceError, Result};
use crate::port::outbound::LedgerRepository;

/// Ledger-wide rules that are not part of the persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Implicit balance of users the ledger has never written.
    pub starting_balance: i64,
    /// Upper bound on a single load or save.
    pub commit_timeout: Duration,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            commit_timeout: Duration::from_secs(5),
        }
    }
}

/// Owner of the ledger root.
pub struct LedgerStore {
    committed: Arc<RwLock<Arc<LedgerRoot>>>,
    writer: Arc<Mutex<()>>,
    repository: Arc<dyn LedgerRepository>,
    policy: LedgerPolicy,
}

impl LedgerStore {
    /// Load the committed root from `repository`.
    pub async fn open(repository: Arc<dyn LedgerRepository>, policy: LedgerPolicy) -> Result<Self> {
        let root = tokio::time::timeout(policy.commit_timeout, repository.load())
            .await
            .map_err(|_| PersistenceError::Timeout {
                after: policy.commit_timeout,
            })??;

        debug!(
            repository = repository.name(),
            users = root.users.len(),
            matches = root.matches.len(),
            next_match_id = %root.next_match_id,
            balances = %root.users.total(),
            escrowed = %root.escrowed(),
            "Ledger store opened"
        );

        Ok(Self {
            committed: Arc::new(RwLock::new(Arc::new(root))),
            writer: Arc::new(Mutex::new(())),
            repository,
            policy,
        })
    }

    #[must_use]
    pub fn starting_balance(&self) -> i64 {
        self.policy.starting_balance
    }

    /// The last committed root.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LedgerRoot> {
        Arc::clone(&self.committed.read())
    }

    /// Run `operation` as one atomic read-modify-write of the root.
    ///
    /// `operation` gets a mutable copy of the committed root. If it returns
    /// `Ok`, the copy is persisted and becomes the committed root; if it
    /// returns `Err`, or persisting fails, the copy is dropped and nothing
    /// is observable.
    pub async fn transact<T, F>(&self, name: &'static str, operation: F) -> Result<T>
    where
        F: FnOnce(&mut LedgerRoot) -> std::result::Result<T, DomainError>,
    {
        let writer = Arc::clone(&self.writer).lock_owned().await;
        let mut draft = LedgerRoot::clone(&self.snapshot());

        let value = match operation(&mut draft) {
            Ok(value) => value,
            Err(e) => {
                debug!(operation = name, error = %e, "Transaction rejected");
                return Err(e.into());
            }
        };

        let repository = Arc::clone(&self.repository);
        let committed = Arc::clone(&self.committed);
        let budget = self.policy.commit_timeout;
        let commit = tokio::spawn(async move {
            let _writer = writer;
            if let Err(e) = repository.save(&draft, budget).await {
                warn!(
                    operation = name,
                    repository = repository.name(),
                    error = %e,
                    "Commit failed, ledger left at previous state"
                );
                return Err(e);
            }
            *committed.write() = Arc::new(draft);
            Ok(())
        });

        commit
            .await
            .map_err(|e| PersistenceError::Task(e.to_string()))??;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::MemoryRepository;
    use crate::domain::UserId;
    use crate::error::Error;
    use crate::testkit::store::FailingRepository;

    async fn memory_store() -> (Arc<MemoryRepository>, LedgerStore) {
        let repo = Arc::new(MemoryRepository::new());
        let store = LedgerStore::open(repo.clone(), LedgerPolicy::default())
            .await
            .unwrap();
        (repo, store)
    }

    #[tokio::test]
    async fn committed_transaction_is_visible_and_saved() {
        let (repo, store) = memory_store().await;

        let balance = store
            .transact("test", |root| root.credit(&UserId::new("1"), 5, 1000))
            .await
            .unwrap();

        assert_eq!(balance, 1005);
        assert_eq!(store.snapshot().users.get(&UserId::new("1")), Some(1005));
        assert_eq!(repo.stored().users.get(&UserId::new("1")), Some(1005));
    }

    #[tokio::test]
    async fn rejected_transaction_discards_partial_edits() {
        let (repo, store) = memory_store().await;

        let result: Result<()> = store
            .transact("test", |root| {
                root.users.set(UserId::new("1"), 1);
                Err(DomainError::InvalidAmount { amount: 0 })
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::InvalidAmount { amount: 0 }))
        ));
        assert!(store.snapshot().users.is_empty());
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn failed_save_rolls_back() {
        let repo = Arc::new(FailingRepository::new());
        let store = LedgerStore::open(repo.clone(), LedgerPolicy::default())
            .await
            .unwrap();
        repo.fail_saves(true);

        let result = store
            .transact("test", |root| root.credit(&UserId::new("1"), 5, 1000))
            .await;

        assert!(matches!(result, Err(Error::Persistence(_))));
        assert!(store.snapshot().users.is_empty());
    }

    #[tokio::test]
    async fn slow_save_times_out_and_never_lands() {
        let repo = Arc::new(FailingRepository::new());
        let policy = LedgerPolicy {
            commit_timeout: Duration::from_millis(20),
            ..LedgerPolicy::default()
        };
        let store = LedgerStore::open(repo.clone(), policy).await.unwrap();
        repo.delay_saves(Duration::from_millis(100));

        let result = store
            .transact("test", |root| root.credit(&UserId::new("1"), 5, 1000))
            .await;

        assert!(matches!(
            result,
            Err(Error::Persistence(PersistenceError::Timeout { .. }))
        ));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(store.snapshot().users.is_empty());
        assert!(repo.stored().users.is_empty());
    }

    #[tokio::test]
    async fn abandoned_caller_does_not_split_store_from_repository() {
        let repo = Arc::new(FailingRepository::new());
        let store = LedgerStore::open(repo.clone(), LedgerPolicy::default())
            .await
            .unwrap();
        repo.delay_saves(Duration::from_millis(50));

        let gave_up = tokio::time::timeout(
            Duration::from_millis(5),
            store.transact("test", |root| root.credit(&UserId::new("1"), 5, 1000)),
        )
        .await;
        assert!(gave_up.is_err());

        // The next transaction waits for the detached commit to finish.
        store
            .transact("test", |root| root.credit(&UserId::new("2"), 1, 1000))
            .await
            .unwrap();

        let user = UserId::new("1");
        assert_eq!(store.snapshot().users.get(&user), Some(1005));
        assert_eq!(repo.stored().users.get(&user), Some(1005));
    }
}
