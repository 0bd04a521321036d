//! Social platforms an account can link.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported social platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    YouTube,
    TikTok,
    Twitter,
    Facebook,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Self; 5] = [
        Self::Instagram,
        Self::YouTube,
        Self::TikTok,
        Self::Twitter,
        Self::Facebook,
    ];

    /// Lowercase identifier used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

/// A platform linked to an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedPlatform {
    /// Which platform
    pub platform: Platform,

    /// Handle on that platform
    pub username: String,

    /// Whether the link is currently active
    pub connected: bool,

    /// Last verification time (ms since Unix epoch)
    pub last_verified_ms: u64,
}

impl ConnectedPlatform {
    /// Simulated connection: no platform API is contacted, the handle is
    /// derived from the platform name.
    pub fn simulated(platform: Platform) -> Self {
        Self {
            platform,
            username: format!("{}_user", platform),
            connected: true,
            last_verified_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
        }
    }
}
