//! # Calculator
//!
//! Orchestrates one price calculation.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_final_price(items, campaigns)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate ──── Err ──► CoreError::Validation (no partial result)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CampaignSet::select  (one per kind, lookup only)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal ──► coupon ──► on_top ──► seasonal      (unrounded)          │
//! │                             │                                           │
//! │                             └──► warning?                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round each figure to cents ──► CalculateResult                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens once, on the reported figures. Feeding a rounded total
//! into the next stage would compound cent errors across the chain.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::{apply_coupon, apply_on_top, apply_seasonal, cart_subtotal, StageOutcome};
use crate::types::{
    AppliedCampaigns, CalculateResult, Campaign, CampaignSet, CartItem, DiscountBreakdown,
};
use crate::validation::validate;

// =============================================================================
// Entry Points
// =============================================================================

/// Computes the final price of a cart from the interchange campaign list.
///
/// ## Example
/// ```rust
/// use pricewise_core::{calculate_final_price, Campaign, CartItem, Category, Money, OnTopCampaign};
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     CartItem::new("T-Shirt", Category::Clothing, Money::from_units(350), 2),
///     CartItem::new("Hat", Category::Accessories, Money::from_units(250), 1),
///     CartItem::new("Headphones", Category::Electronics, Money::from_units(1200), 1),
/// ];
/// let campaigns = vec![Campaign::OnTop(OnTopCampaign::Points {
///     points: Decimal::from(9999),
/// })];
///
/// let result = calculate_final_price(&items, &campaigns).unwrap();
/// assert_eq!(result.breakdown.on_top_discount, Money::from_units(430));
/// assert_eq!(result.breakdown.final_total, Money::from_units(1720));
/// assert!(result.warnings.unwrap()[0].contains("capped at 20%"));
/// ```
pub fn calculate_final_price(items: &[CartItem], campaigns: &[Campaign]) -> CoreResult<CalculateResult> {
    validate(items, campaigns)?;
    run_pipeline(items, CampaignSet::select(campaigns))
}

/// Computes the final price when the caller already holds a typed
/// [`CampaignSet`].
///
/// The set cannot hold duplicates, but items and campaign fields are still
/// validated.
pub fn calculate_with_set(items: &[CartItem], campaigns: CampaignSet) -> CoreResult<CalculateResult> {
    validate(items, &campaigns.to_campaigns())?;
    run_pipeline(items, campaigns)
}

// =============================================================================
// Pipeline
// =============================================================================

fn run_pipeline(items: &[CartItem], campaigns: CampaignSet) -> CoreResult<CalculateResult> {
    let subtotal = cart_subtotal(items).ok_or(CoreError::AmountOutOfRange { figure: "subtotal" })?;

    let coupon = apply_coupon(subtotal, campaigns.coupon.as_ref());
    let on_top = apply_on_top(items, coupon.total_after, campaigns.on_top.as_ref());
    let seasonal = apply_seasonal(on_top.total_after, campaigns.seasonal.as_ref());

    let warnings: Vec<String> = [&coupon, &on_top, &seasonal]
        .into_iter()
        .filter_map(|stage| stage.warning.clone())
        .collect();

    Ok(CalculateResult {
        breakdown: rounded_breakdown(subtotal, &coupon, &on_top, &seasonal),
        applied: AppliedCampaigns::from(&campaigns),
        warnings: (!warnings.is_empty()).then_some(warnings),
    })
}

/// Rounds every figure independently. `final_total` is `after_seasonal`.
fn rounded_breakdown(
    subtotal: Money,
    coupon: &StageOutcome,
    on_top: &StageOutcome,
    seasonal: &StageOutcome,
) -> DiscountBreakdown {
    let after_seasonal = seasonal.total_after.round_to_cents();

    DiscountBreakdown {
        subtotal: subtotal.round_to_cents(),
        coupon_discount: coupon.discount.round_to_cents(),
        after_coupon: coupon.total_after.round_to_cents(),
        on_top_discount: on_top.discount.round_to_cents(),
        after_on_top: on_top.total_after.round_to_cents(),
        seasonal_discount: seasonal.discount.round_to_cents(),
        after_seasonal,
        final_total: after_seasonal,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
