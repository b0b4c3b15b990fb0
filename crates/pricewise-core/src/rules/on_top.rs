//! # On-Top Stage
//!
//! Runs on the post-coupon total. Two methods:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CATEGORY PERCENTAGE                                                    │
//! │    discount = (Σ line totals of the category) × pct / 100              │
//! │    The category subtotal comes from the ORIGINAL items, pre-coupon.    │
//! │    No matching item → discount 0 (not an error).                       │
//! │                                                                         │
//! │  POINTS (1 point = 1 currency unit)                                    │
//! │    cap      = base × 20%                                               │
//! │    discount = min(points, cap, base)                                   │
//! │    points > cap → warning "Points discount capped at 20% of total     │
//! │                            (X.XX THB)."                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::money::Money;
use crate::rules::{category_subtotal, StageOutcome};
use crate::types::{CartItem, OnTopCampaign};
use crate::{CURRENCY_CODE, POINTS_CAP_PERCENT};

/// Applies an optional on-top campaign to `total_before`.
///
/// `items` are the cart's original items; `total_before` is the running
/// total after the coupon stage and acts as both base and cap.
pub fn apply_on_top(
    items: &[CartItem],
    total_before: Money,
    on_top: Option<&OnTopCampaign>,
) -> StageOutcome {
    let base = total_before.clamp_non_negative();

    match on_top {
        None => StageOutcome::untouched(base),
        Some(OnTopCampaign::CategoryPercentage {
            category,
            percentage,
        }) => {
            let discount = category_subtotal(items, *category).percent_of(*percentage);
            StageOutcome::from_discount(base, discount)
        }
        Some(OnTopCampaign::Points { points }) => apply_points(base, *points),
    }
}

fn apply_points(base: Money, points: Decimal) -> StageOutcome {
    let cap = base.percent_of(Decimal::from(POINTS_CAP_PERCENT));
    let requested = Money::new(points);
    let outcome = StageOutcome::from_discount(base, requested.min(cap));

    if requested > cap {
        outcome.with_warning(format!(
            "Points discount capped at {}% of total ({} {}).",
            POINTS_CAP_PERCENT, cap, CURRENCY_CODE
        ))
    } else {
        outcome
    }
}
