//! Account records.
//!
//! An account holds identity and linked platforms only. Its loyalty counter
//! lives beside it in the session, joined by [`AccountId`].

use crate::platform::{ConnectedPlatform, Platform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the random suffix in an account id.
const ID_SUFFIX_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque account identifier of the form `user-xxxxxxxxx`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Prefix shared by all generated ids.
    pub const PREFIX: &'static str = "user-";

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}{}", Self::PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Email address (also the store key)
    pub email: String,

    /// Display name
    pub username: Option<String>,

    /// Linked social platforms, at most one entry per platform
    #[serde(default)]
    pub connected_platforms: Vec<ConnectedPlatform>,
}

impl Account {
    /// Create an account with no linked platforms.
    pub fn new(email: String, username: Option<String>) -> Self {
        Self {
            id: AccountId::generate(),
            email,
            username,
            connected_platforms: Vec::new(),
        }
    }

    /// Link a platform, replacing any existing link to it.
    pub fn connect(&mut self, linked: ConnectedPlatform) {
        self.disconnect(linked.platform);
        self.connected_platforms.push(linked);
    }

    /// Remove the link to a platform, if any.
    pub fn disconnect(&mut self, platform: Platform) -> bool {
        let before = self.connected_platforms.len();
        self.connected_platforms.retain(|p| p.platform != platform);
        self.connected_platforms.len() != before
    }

    /// Whether the platform is currently linked.
    pub fn is_connected(&self, platform: Platform) -> bool {
        self.connected_platforms
            .iter()
            .any(|p| p.platform == platform && p.connected)
    }
}
