//! GreenCabal Loyalty Discount
//!
//! Converts a growing count of qualifying actions (engagements, posts,
//! platform connections) into a capped percentage discount.
//!
//! # Accrual Rule
//!
//! Every 20 qualifying actions earn one percentage point, up to 50%:
//! - percent = min(floor(actions / 20), 50)
//! - remaining = 20 - (actions mod 20) below the cap, 0 at the cap
//!
//! The percentage moves in whole steps only, so the remaining counter is
//! always in [1, 20] until the cap is hit.
//!
//! # State
//!
//! [`LoyaltyState`] is a standalone value type. It carries no session or
//! authentication state; the caller pairs it with an account and owns its
//! persistence.

mod accrual;
mod error;
mod info;
mod policy;
mod state;

pub use accrual::{
    actions_to_reach, actions_until_next_percent, discount_info, discount_percentage,
    record_qualifying_action,
};
pub use error::{Error, Result};
pub use info::DiscountInfo;
pub use policy::{DiscountPolicy, ACTIONS_PER_PERCENT, MAX_DISCOUNT_PERCENT};
pub use state::LoyaltyState;

// The cap must be reachable and express a real discount
const _: () = assert!(ACTIONS_PER_PERCENT > 0 && MAX_DISCOUNT_PERCENT <= 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_reached_at_one_thousand() {
        assert_eq!(actions_to_reach(MAX_DISCOUNT_PERCENT), 1000);
        assert_eq!(discount_percentage(999), 49);
        assert_eq!(discount_percentage(1000), 50);
    }

    #[test]
    fn full_lifecycle() {
        let mut state = LoyaltyState::ZERO;
        for _ in 0..19 {
            state.record_qualifying_action();
        }
        assert_eq!(state.discount_info().actions_until_next_percent, 1);

        state.record_qualifying_action();
        let info = state.discount_info();
        assert_eq!(info.discount_percentage, 1);
        assert_eq!(info.actions_until_next_percent, 20);
    }
}
