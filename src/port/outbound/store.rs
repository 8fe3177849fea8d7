//! Persistence port for the ledger root.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::LedgerRoot;
use crate::error::PersistenceError;

/// Durable medium behind the ledger store.
///
/// The store always writes the complete root, so implementations only need
/// whole-document load and replace. A failed `save` must leave the previously
/// saved document intact.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Read the last committed root. A medium with nothing in it yields
    /// [`LedgerRoot::default`].
    async fn load(&self) -> Result<LedgerRoot, PersistenceError>;

    /// Replace the stored root, giving up after `budget`.
    ///
    /// A save has a single commit point. Before it, running out of `budget`
    /// returns [`PersistenceError::Timeout`] and the stored root must stay
    /// as it was, then and later. Once past it, the save runs to completion
    /// regardless of `budget`.
    async fn save(&self, root: &LedgerRoot, budget: Duration) -> Result<(), PersistenceError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
