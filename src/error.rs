use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of the durable medium behind the ledger.
///
/// Any of these aborts the transaction that triggered it; the in-memory
/// ledger keeps its last committed state.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("ledger I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("ledger document could not be encoded or decoded: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("ledger commit timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("ledger document is corrupt: {reason}")]
    Corrupt { reason: String },

    #[error("ledger writer task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl Error {
    /// True when the failure came from the storage medium rather than from
    /// validation. Only these are worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchId;

    #[test]
    fn only_persistence_failures_are_retryable() {
        let timeout = Error::from(PersistenceError::Timeout {
            after: Duration::from_millis(10),
        });
        assert!(timeout.is_retryable());

        let missing = Error::from(DomainError::MatchNotFound {
            match_id: MatchId::new(3),
        });
        assert!(!missing.is_retryable());
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err = Error::from(DomainError::InvalidOdds { moneyline: 0 });
        assert_eq!(err.to_string(), "invalid moneyline 0: must be non-zero");
    }
}
