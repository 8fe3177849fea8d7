//! Single-document JSON file repository.
//!
//! The document keeps the chat bot's layout (`users`, `matches`,
//! `next_match_id`), so existing data files load in place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::LedgerRoot;
use crate::error::PersistenceError;
use crate::port::outbound::LedgerRepository;

const WRITE_PENDING: u8 = 0;
const WRITE_DONE: u8 = 1;
const WRITE_ABANDONED: u8 = 2;

/// Stores the ledger root as pretty-printed JSON at a fixed path.
///
/// Saves write a uniquely named temp file, fsync it, then rename it over the
/// document, so a failed or abandoned save never truncates the live file.
/// The save budget bounds the temp-file write only. A fully written temp file
/// is the commit point: its rename is never abandoned.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    sequence: AtomicU64,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_temp_path(&self) -> PathBuf {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        let mut name = self
            .path
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.{n}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    /// Write `root` and rename it into place. `budget` bounds the write
    /// phase; `None` waits as long as it takes.
    async fn commit(
        &self,
        root: &LedgerRoot,
        budget: Option<Duration>,
    ) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(root)?;
        let temp = self.next_temp_path();
        let state = Arc::new(AtomicU8::new(WRITE_PENDING));

        let mut write = tokio::task::spawn_blocking({
            let temp = temp.clone();
            let state = Arc::clone(&state);
            move || -> std::io::Result<()> {
                write_temp(&temp, &bytes)?;
                let claimed = state.compare_exchange(
                    WRITE_PENDING,
                    WRITE_DONE,
                    Ordering::AcqRel,
                    Ordering::Acquire,
                );
                if claimed.is_err() {
                    let _ = fs::remove_file(&temp);
                }
                Ok(())
            }
        });

        let written = match budget {
            Some(budget) => match tokio::time::timeout(budget, &mut write).await {
                Ok(joined) => joined,
                // A write that finished as the budget ran out still commits.
                Err(_) => match state.compare_exchange(
                    WRITE_PENDING,
                    WRITE_ABANDONED,
                    Ordering::AcqRel,
                    Ordering::Acquire,
                ) {
                    Ok(_) => {
                        warn!(path = %self.path.display(), ?budget, "Ledger write abandoned");
                        return Err(PersistenceError::Timeout { after: budget });
                    }
                    Err(_) => write.await,
                },
            },
            None => write.await,
        };
        written.map_err(|e| PersistenceError::Task(e.to_string()))??;

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || {
            fs::rename(&temp, &target).map_err(|e| {
                let _ = fs::remove_file(&temp);
                e
            })
        })
        .await
        .map_err(|e| PersistenceError::Task(e.to_string()))??;
        Ok(())
    }
}

/// Write `bytes` to `temp` and flush it to disk, removing it on failure.
fn write_temp(temp: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = temp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let result = fs::File::create(temp).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if result.is_err() {
        let _ = fs::remove_file(temp);
    }
    result
}

#[async_trait]
impl LedgerRepository for JsonFileRepository {
    async fn load(&self) -> Result<LedgerRoot, PersistenceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Ledger file missing, creating empty ledger");
                let root = LedgerRoot::default();
                self.commit(&root, None).await?;
                return Ok(root);
            }
            Err(e) => return Err(e.into()),
        };

        let root: LedgerRoot = serde_json::from_slice(&bytes)?;
        root.validate()
            .map_err(|reason| PersistenceError::Corrupt { reason })?;

        debug!(
            path = %self.path.display(),
            users = root.users.len(),
            matches = root.matches.len(),
            "Ledger loaded"
        );
        Ok(root)
    }

    async fn save(&self, root: &LedgerRoot, budget: Duration) -> Result<(), PersistenceError> {
        self.commit(root, Some(budget)).await
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}
