//! Per-account loyalty counter.
//!
//! A `LoyaltyState` knows nothing about sessions or authentication. Callers
//! associate it with an account themselves and hand it back to their store
//! when the session ends.

use crate::error::{Error, Result};
use crate::info::DiscountInfo;
use crate::policy::DiscountPolicy;

/// Count of qualifying actions credited to one account.
///
/// Only ever grows. The discount is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LoyaltyState {
    qualifying_actions: u64,
}

impl LoyaltyState {
    /// A fresh account with no actions.
    pub const ZERO: Self = Self {
        qualifying_actions: 0,
    };

    /// Resume from a previously stored count.
    pub const fn new(qualifying_actions: u64) -> Self {
        Self { qualifying_actions }
    }

    /// Resume from a signed count supplied by an external store.
    ///
    /// Negative counts are a caller bug and are rejected here.
    pub fn try_from_imported(count: i64) -> Result<Self> {
        u64::try_from(count)
            .map(Self::new)
            .map_err(|_| Error::NegativeActionCount(count))
    }

    /// Qualifying actions recorded so far.
    pub const fn qualifying_actions(&self) -> u64 {
        self.qualifying_actions
    }

    /// Credit exactly one qualifying action.
    pub fn record_qualifying_action(&mut self) {
        self.record_qualifying_actions(1);
    }

    /// Credit `count` qualifying actions at once.
    pub fn record_qualifying_actions(&mut self, count: u64) {
        self.qualifying_actions = self.qualifying_actions.saturating_add(count);
    }

    /// By-value form of [`record_qualifying_action`](Self::record_qualifying_action).
    #[must_use]
    pub const fn recorded(self) -> Self {
        Self {
            qualifying_actions: self.qualifying_actions.saturating_add(1),
        }
    }

    /// Discount under the standard policy.
    pub const fn discount_info(&self) -> DiscountInfo {
        self.discount_info_with(&DiscountPolicy::STANDARD)
    }

    /// Discount under a custom policy.
    pub const fn discount_info_with(&self, policy: &DiscountPolicy) -> DiscountInfo {
        policy.info(self.qualifying_actions)
    }
}

impl From<u64> for LoyaltyState {
    fn from(count: u64) -> Self {
        Self::new(count)
    }
}

impl TryFrom<i64> for LoyaltyState {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        Self::try_from_imported(count)
    }
}
