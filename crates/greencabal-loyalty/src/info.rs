//! Discount snapshot handed to the presentation layer.

use std::fmt;

/// Derived discount state for one account at one moment.
///
/// Plain data; recomputed on every query rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscountInfo {
    /// Qualifying actions credited so far
    pub total_actions: u64,
    /// Discount earned, in [0, CAP]
    pub discount_percentage: u32,
    /// Actions left until the next percent, 0 at the cap
    pub actions_until_next_percent: u32,
}

impl DiscountInfo {
    /// Whether the discount has reached the policy cap.
    pub const fn is_maxed(&self) -> bool {
        self.actions_until_next_percent == 0
    }

    /// Short progress caption, e.g. "8 to next %".
    pub fn progress_label(&self) -> String {
        if self.is_maxed() {
            "max discount reached".to_string()
        } else {
            format!("{} to next %", self.actions_until_next_percent)
        }
    }
}

impl fmt::Display for DiscountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.discount_percentage)
    }
}
