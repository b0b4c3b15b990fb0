//! Coupon stage: fixed amount or percentage off the cart subtotal.

use crate::money::Money;
use crate::rules::StageOutcome;
use crate::types::CouponCampaign;

/// Applies an optional coupon to `total_before`.
///
/// ## Rules
/// - `base = max(0, total_before)`
/// - Fixed: `min(amount, base)`, a coupon never discounts more than the base
/// - Percentage: `base × percentage / 100`, clamped to `base`
///
/// ## Example
/// ```rust
/// use pricewise_core::rules::apply_coupon;
/// use pricewise_core::{CouponCampaign, Money};
///
/// let coupon = CouponCampaign::Fixed { amount: Money::from_units(999) };
/// let outcome = apply_coupon(Money::from_units(100), Some(&coupon));
/// assert_eq!(outcome.discount, Money::from_units(100));
/// assert_eq!(outcome.total_after, Money::zero());
/// ```
pub fn apply_coupon(total_before: Money, coupon: Option<&CouponCampaign>) -> StageOutcome {
    let base = total_before.clamp_non_negative();

    let Some(coupon) = coupon else {
        return StageOutcome::untouched(base);
    };

    let discount = match coupon {
        CouponCampaign::Fixed { amount } => *amount,
        CouponCampaign::Percentage { percentage } => base.percent_of(*percentage),
    };

    StageOutcome::from_discount(base, discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_coupon() {
        let outcome = apply_coupon(Money::from_units(2150), None);
        assert_eq!(outcome.discount, Money::zero());
        assert_eq!(outcome.total_after, Money::from_units(2150));
    }

    #[test]
    fn test_negative_input_is_floored() {
        let outcome = apply_coupon(Money::from_units(-20), None);
        assert_eq!(outcome.total_after, Money::zero());
    }

    #[test]
    fn test_fixed() {
        let coupon = CouponCampaign::Fixed {
            amount: Money::from_units(50),
        };
        let outcome = apply_coupon(Money::from_units(2150), Some(&coupon));
        assert_eq!(outcome.discount, Money::from_units(50));
        assert_eq!(outcome.total_after, Money::from_units(2100));
    }

    #[test]
    fn test_percentage() {
        let coupon = CouponCampaign::Percentage { percentage: dec!(10) };
        let outcome = apply_coupon(Money::from_units(2150), Some(&coupon));
        assert_eq!(outcome.discount, Money::from_units(215));
        assert_eq!(outcome.total_after, Money::from_units(1935));

        let full = CouponCampaign::Percentage { percentage: dec!(100) };
        let outcome = apply_coupon(Money::from_units(2150), Some(&full));
        assert_eq!(outcome.total_after, Money::zero());
    }
}
