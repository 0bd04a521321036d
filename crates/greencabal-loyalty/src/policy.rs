//! Accrual policy: how many actions buy one percent, and where it stops.
//!
//! The discount grows in whole-percent steps:
//! - percent = min(floor(total / K), CAP)
//! - remaining = 0 at CAP, otherwise K - (total mod K)
//!
//! No partial credit, so `remaining` is always in [1, K] below the cap.

use crate::error::{Error, Result};
use crate::info::DiscountInfo;

/// Qualifying actions required to earn one percentage point (K).
pub const ACTIONS_PER_PERCENT: u32 = 20;

/// Maximum attainable discount percentage (CAP).
pub const MAX_DISCOUNT_PERCENT: u32 = 50;

/// Rate and cap for converting an action count into a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountPolicy {
    actions_per_percent: u32,
    max_percent: u32,
}

impl DiscountPolicy {
    /// The production policy: 20 actions per percent, capped at 50%.
    pub const STANDARD: Self = Self {
        actions_per_percent: ACTIONS_PER_PERCENT,
        max_percent: MAX_DISCOUNT_PERCENT,
    };

    /// Build a custom policy.
    ///
    /// A zero rate would divide by zero, and a cap above 100% is not a discount.
    pub fn new(actions_per_percent: u32, max_percent: u32) -> Result<Self> {
        if actions_per_percent == 0 {
            return Err(Error::ZeroActionsPerPercent);
        }
        if max_percent > 100 {
            return Err(Error::CapAboveHundred(max_percent));
        }
        Ok(Self {
            actions_per_percent,
            max_percent,
        })
    }

    /// Actions required per percentage point (K).
    pub const fn actions_per_percent(&self) -> u32 {
        self.actions_per_percent
    }

    /// Maximum discount percentage (CAP).
    pub const fn max_percent(&self) -> u32 {
        self.max_percent
    }

    /// Discount earned by `total` actions.
    ///
    /// Formula: min(floor(total / K), CAP)
    pub const fn percentage_for(&self, total: u64) -> u32 {
        let earned = total / self.actions_per_percent as u64;
        if earned >= self.max_percent as u64 {
            self.max_percent
        } else {
            earned as u32
        }
    }

    /// Additional actions needed before the percentage next increases.
    ///
    /// Zero exactly at the cap, otherwise in [1, K].
    pub const fn remaining_for(&self, total: u64) -> u32 {
        if self.percentage_for(total) == self.max_percent {
            0
        } else {
            self.actions_per_percent - (total % self.actions_per_percent as u64) as u32
        }
    }

    /// Total action count at which `percent` is first reached.
    ///
    /// Percentages above the cap are clamped to it.
    pub const fn actions_to_reach(&self, percent: u32) -> u64 {
        let percent = if percent > self.max_percent {
            self.max_percent
        } else {
            percent
        };
        percent as u64 * self.actions_per_percent as u64
    }

    /// Total action count at which the cap is reached.
    pub const fn actions_to_max(&self) -> u64 {
        self.actions_to_reach(self.max_percent)
    }

    /// Full discount snapshot for `total` actions.
    pub const fn info(&self, total: u64) -> DiscountInfo {
        DiscountInfo {
            total_actions: total,
            discount_percentage: self.percentage_for(total),
            actions_until_next_percent: self.remaining_for(total),
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_constants() {
        let policy = DiscountPolicy::default();
        assert_eq!(policy.actions_per_percent(), 20);
        assert_eq!(policy.max_percent(), 50);
        assert_eq!(policy.actions_to_max(), 1000);
    }

    #[test]
    fn percentage_steps_every_k_actions() {
        let policy = DiscountPolicy::STANDARD;
        let test_cases = [
            (0, 0),
            (19, 0),
            (20, 1),
            (39, 1),
            (40, 2),
            (240, 12),
            (999, 49),
            (1000, 50),
            (5000, 50), // Excess actions past the cap
        ];

        for (total, expected) in test_cases {
            assert_eq!(
                policy.percentage_for(total),
                expected,
                "percentage_for({}) should be {}",
                total,
                expected
            );
        }
    }

    #[test]
    fn remaining_in_range_below_cap() {
        let policy = DiscountPolicy::STANDARD;
        for total in 0..policy.actions_to_max() {
            let remaining = policy.remaining_for(total);
            assert!(
                (1..=20).contains(&remaining),
                "remaining_for({}) = {} out of range",
                total,
                remaining
            );
        }
        assert_eq!(policy.remaining_for(1000), 0);
        assert_eq!(policy.remaining_for(u64::MAX), 0);
    }

    #[test]
    fn actions_to_reach_clamps() {
        let policy = DiscountPolicy::STANDARD;
        assert_eq!(policy.actions_to_reach(0), 0);
        assert_eq!(policy.actions_to_reach(1), 20);
        assert_eq!(policy.actions_to_reach(12), 240);
        assert_eq!(policy.actions_to_reach(80), 1000);
    }

    #[test]
    fn custom_policy() {
        let policy = DiscountPolicy::new(10, 5).unwrap();
        assert_eq!(policy.percentage_for(35), 3);
        assert_eq!(policy.remaining_for(35), 5);
        assert_eq!(policy.percentage_for(50), 5);
        assert_eq!(policy.remaining_for(50), 0);
    }

    #[test]
    fn zero_cap_is_always_maxed() {
        let policy = DiscountPolicy::new(20, 0).unwrap();
        assert_eq!(policy.percentage_for(0), 0);
        assert_eq!(policy.remaining_for(0), 0);
    }

    #[test]
    fn rejects_invalid_policies() {
        assert_eq!(DiscountPolicy::new(0, 50), Err(Error::ZeroActionsPerPercent));
        assert_eq!(DiscountPolicy::new(20, 101), Err(Error::CapAboveHundred(101)));
        assert!(DiscountPolicy::new(1, 100).is_ok());
    }
}
