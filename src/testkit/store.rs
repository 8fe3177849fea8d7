//! Repositories with injectable faults.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::adapter::store::MemoryRepository;
use crate::domain::LedgerRoot;
use crate::error::PersistenceError;
use crate::port::outbound::LedgerRepository;

/// In-memory repository whose saves can be made to fail or hang.
#[derive(Debug, Default)]
pub struct FailingRepository {
    inner: MemoryRepository,
    fail_saves: AtomicBool,
    save_delay_ms: AtomicU64,
}

impl FailingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following save return an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Stall this long before each following save. A stall longer than the
    /// save budget times out without storing anything.
    pub fn delay_saves(&self, delay: Duration) {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.save_delay_ms.store(millis, Ordering::SeqCst);
    }

    /// Copy of the last successfully saved root.
    #[must_use]
    pub fn stored(&self) -> LedgerRoot {
        self.inner.stored()
    }
}

#[async_trait]
impl LedgerRepository for FailingRepository {
    async fn load(&self) -> Result<LedgerRoot, PersistenceError> {
        self.inner.load().await
    }

    async fn save(&self, root: &LedgerRoot, budget: Duration) -> Result<(), PersistenceError> {
        let delay = Duration::from_millis(self.save_delay_ms.load(Ordering::SeqCst));
        if !delay.is_zero()
            && tokio::time::timeout(budget, tokio::time::sleep(delay))
                .await
                .is_err()
        {
            return Err(PersistenceError::Timeout { after: budget });
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("injected save failure").into());
        }
        self.inner.save(root, budget).await
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
