//! Account store seam.
//!
//! Durable storage of loyalty counters belongs to an external service. The
//! session only needs to load a counter when an account signs in and save it
//! when the session ends.

use crate::error::{Error, Result};
use greencabal_loyalty::LoyaltyState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Loads and saves loyalty counters keyed by account email.
pub trait AccountStore {
    /// Counter previously saved for `email`, if any.
    fn load(&self, email: &str) -> Result<Option<LoyaltyState>>;

    /// Save the counter for `email`, replacing any earlier value.
    fn save(&self, email: &str, state: &LoyaltyState) -> Result<()>;
}

/// Stored record layout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoyaltyRecord {
    email: String,
    qualifying_actions: LoyaltyState,
}

/// In-memory store holding JSON-encoded records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountStore for MemoryStore {
    fn load(&self, email: &str) -> Result<Option<LoyaltyState>> {
        let records = self
            .records
            .read()
            .map_err(|_| Error::Store("record lock poisoned".into()))?;
        match records.get(email) {
            Some(data) => {
                let record: LoyaltyRecord = serde_json::from_slice(data)?;
                Ok(Some(record.qualifying_actions))
            }
            None => Ok(None),
        }
    }

    fn save(&self, email: &str, state: &LoyaltyState) -> Result<()> {
        let value = serde_json::to_vec(&LoyaltyRecord {
            email: email.to_string(),
            qualifying_actions: *state,
        })?;
        self.records
            .write()
            .map_err(|_| Error::Store("record lock poisoned".into()))?
            .insert(email.to_string(), value);
        Ok(())
    }
}

impl<S: AccountStore + ?Sized> AccountStore for &S {
    fn load(&self, email: &str) -> Result<Option<LoyaltyState>> {
        (**self).load(email)
    }

    fn save(&self, email: &str, state: &LoyaltyState) -> Result<()> {
        (**self).save(email, state)
    }
}
