//! Seasonal stage: a step discount of `discount_y` for every full `every_x`.

use crate::money::Money;
use crate::rules::StageOutcome;
use crate::types::SeasonalCampaign;

/// Applies an optional seasonal campaign to `total_before`.
///
/// ## Step Function
/// ```text
/// times    = floor(base / every_x)
/// discount = min(times × discount_y, base)
///
/// base 2150, every 300 → 40 off:  floor(7.17) = 7  →  280 off
/// base 1548, every 300 → 40 off:  floor(5.16) = 5  →  200 off
/// ```
///
/// If the step count or the product leaves the decimal range the discount
/// saturates at `base` (or stays 0 when `discount_y` is 0).
pub fn apply_seasonal(total_before: Money, seasonal: Option<&SeasonalCampaign>) -> StageOutcome {
    let base = total_before.clamp_non_negative();

    let Some(seasonal) = seasonal else {
        return StageOutcome::untouched(base);
    };

    let stepped = base
        .amount()
        .checked_div(seasonal.every_x.amount())
        .map(|steps| steps.floor())
        .and_then(|times| times.checked_mul(seasonal.discount_y.amount()));

    let discount = match stepped {
        Some(discount) => Money::new(discount),
        None if seasonal.discount_y.is_zero() => Money::zero(),
        None => base,
    };

    StageOutcome::from_discount(base, discount)
}
