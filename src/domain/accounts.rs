//! User balances in first-seen order.
//!
//! Unknown users are not stored: their balance is the ledger's starting
//! balance, supplied by the caller on every read. A user materializes only
//! when a mutation writes their balance.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::UserId;

/// Balance table keyed by user, remembering insertion order.
///
/// Serializes as a plain JSON object; document order is first-seen order,
/// which breaks leaderboard ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accounts {
    entries: Vec<(UserId, i64)>,
    index: HashMap<UserId, usize>,
}

impl Accounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored balance, if the user has ever been written.
    #[must_use]
    pub fn get(&self, user: &UserId) -> Option<i64> {
        self.index.get(user).map(|&slot| self.entries[slot].1)
    }

    /// Balance with the implicit default for unseen users. Never inserts.
    #[must_use]
    pub fn balance_or(&self, user: &UserId, default: i64) -> i64 {
        self.get(user).unwrap_or(default)
    }

    /// Overwrite a balance, appending the user if new.
    pub fn set(&mut self, user: UserId, balance: i64) {
        if let Some(&slot) = self.index.get(&user) {
            self.entries[slot].1 = balance;
        } else {
            self.index.insert(user.clone(), self.entries.len());
            self.entries.push((user, balance));
        }
    }

    /// Set every stored balance to `balance`. Unseen users stay unseen.
    pub fn reset_all(&mut self, balance: i64) {
        for entry in &mut self.entries {
            entry.1 = balance;
        }
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, i64)> {
        self.entries.iter().map(|(user, balance)| (user, *balance))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every stored balance.
    #[must_use]
    pub fn total(&self) -> i128 {
        self.entries.iter().map(|(_, b)| i128::from(*b)).sum()
    }
}

impl Serialize for Accounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (user, balance) in &self.entries {
            map.serialize_entry(user, balance)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Accounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccountsVisitor;

        impl<'de> Visitor<'de> for AccountsVisitor {
            type Value = Accounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of user id to integer balance")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Accounts, A::Error> {
                let mut accounts = Accounts::new();
                while let Some((user, balance)) = access.next_entry::<UserId, i64>()? {
                    accounts.set(user, balance);
                }
                Ok(accounts)
            }
        }

        deserializer.deserialize_map(AccountsVisitor)
    }
}
