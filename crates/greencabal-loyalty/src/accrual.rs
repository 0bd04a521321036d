//! The two engine operations under the standard policy.
//!
//! - record: count → count + 1
//! - query:  count → {total, min(floor(count / 20), 50), remaining}
//!
//! An absent state reads as count 0, so a logged-out caller sees
//! `{0, 0, 20}` rather than an error.

use crate::info::DiscountInfo;
use crate::policy::DiscountPolicy;
use crate::state::LoyaltyState;

/// Credit one qualifying action, returning the new state.
pub const fn record_qualifying_action(state: LoyaltyState) -> LoyaltyState {
    state.recorded()
}

/// Discount snapshot for a possibly absent state.
///
/// # Examples
///
/// ```
/// use greencabal_loyalty::{discount_info, LoyaltyState};
///
/// let info = discount_info(None);
/// assert_eq!(info.actions_until_next_percent, 20); // Absent reads as zero
///
/// let info = discount_info(Some(&LoyaltyState::new(25)));
/// assert_eq!(info.discount_percentage, 1);
/// assert_eq!(info.actions_until_next_percent, 15);
/// ```
pub const fn discount_info(state: Option<&LoyaltyState>) -> DiscountInfo {
    match state {
        Some(state) => state.discount_info(),
        None => DiscountPolicy::STANDARD.info(0),
    }
}

/// Discount percentage earned by `total` actions.
pub const fn discount_percentage(total: u64) -> u32 {
    DiscountPolicy::STANDARD.percentage_for(total)
}

/// Actions left before the percentage next increases (0 at the cap).
pub const fn actions_until_next_percent(total: u64) -> u32 {
    DiscountPolicy::STANDARD.remaining_for(total)
}

/// Total actions at which `percent` is first reached.
pub const fn actions_to_reach(percent: u32) -> u64 {
    DiscountPolicy::STANDARD.actions_to_reach(percent)
}
