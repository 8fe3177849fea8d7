//! In-memory repository for tests and ephemeral ledgers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::LedgerRoot;
use crate::error::PersistenceError;
use crate::port::outbound::LedgerRepository;

/// Keeps the last saved root in memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    root: RwLock<LedgerRoot>,
    saves: AtomicUsize,
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last saved root.
    #[must_use]
    pub fn stored(&self) -> LedgerRoot {
        self.root.read().clone()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerRepository for MemoryRepository {
    async fn load(&self) -> Result<LedgerRoot, PersistenceError> {
        Ok(self.root.read().clone())
    }

    async fn save(&self, root: &LedgerRoot, _budget: Duration) -> Result<(), PersistenceError> {
        *self.root.write() = root.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
