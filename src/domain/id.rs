//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host-platform user identifier - newtype for type safety.
///
/// Opaque to the ledger; the front end decides what goes in here (a chat
/// user id, an account name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the user ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Match identifier assigned by the ledger.
///
/// Ids increase monotonically and are never reused, even after the match
/// they named was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u64);

impl MatchId {
    /// The id handed out by an empty ledger.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` once ids are exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MatchId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_from_str() {
        let id = UserId::from("4242");
        assert_eq!(id.as_str(), "4242");
        assert_eq!(id.to_string(), "4242");
    }

    #[test]
    fn match_id_next_is_monotonic() {
        let id = MatchId::FIRST;
        assert_eq!(id.next(), Some(MatchId::new(2)));
        assert!(Some(id) < id.next());
    }

    #[test]
    fn match_id_next_stops_at_max() {
        assert_eq!(MatchId::new(u64::MAX).next(), None);
    }

    #[test]
    fn ids_serialize_as_bare_values() {
        assert_eq!(serde_json::to_string(&MatchId::new(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&UserId::new("u1")).unwrap(), "\"u1\"");
    }
}
