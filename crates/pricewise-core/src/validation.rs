//! # Validation Module
//!
//! Business rule validation for cart items and campaigns.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: pricing-api (HTTP body decoding)                             │
//! │  ├── Body is a JSON object with `items` and `campaigns` arrays         │
//! │  └── Each element decodes into CartItem / Campaign                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (runs before any arithmetic)                     │
//! │  ├── Item names, prices, quantities                                    │
//! │  ├── Campaign amounts and percentage ranges                            │
//! │  └── At most one campaign per kind                                     │
//! │                                                                         │
//! │  Typed values are re-checked here: they may still come from an         │
//! │  untrusted transport.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricewise_core::validation::validate;
//! use pricewise_core::{CartItem, Category, Money};
//!
//! let items = vec![CartItem::new("Hat", Category::Accessories, Money::from_units(250), 1)];
//! assert!(validate(&items, &[]).is_ok());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Campaign, CampaignKind, CartItem, CouponCampaign, OnTopCampaign};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Entry Point
// =============================================================================

/// Validates a full calculation request.
///
/// ## Order of Checks (first failure wins)
/// 1. Every item, in list order
/// 2. Every campaign's own fields, in list order
/// 3. One campaign per kind (coupon, then on_top, then seasonal)
pub fn validate(items: &[CartItem], campaigns: &[Campaign]) -> ValidationResult<()> {
    for (i, item) in items.iter().enumerate() {
        validate_item(i + 1, item)?;
    }

    for campaign in campaigns {
        validate_campaign(campaign)?;
    }

    validate_one_per_kind(campaigns)
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates one cart item. `index` is 1-based and appears in the message.
///
/// ## Rules
/// - Name must not be blank
/// - Unit price must be >= 0 (free items are allowed)
/// - Quantity must be a whole number >= 1
pub fn validate_item(index: usize, item: &CartItem) -> ValidationResult<()> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::ItemNameRequired { index });
    }

    if item.unit_price.is_negative() {
        return Err(ValidationError::ItemUnitPrice { index });
    }

    validate_quantity(index, item.quantity)
}

/// Validates an item quantity.
///
/// ```text
/// 2    → OK
/// 0    → "Item #n quantity must be an integer >= 1."
/// -1   → same
/// 1.5  → same
/// ```
pub fn validate_quantity(index: usize, quantity: Decimal) -> ValidationResult<()> {
    if quantity < Decimal::ONE || !quantity.fract().is_zero() {
        return Err(ValidationError::ItemQuantity { index });
    }

    Ok(())
}

// =============================================================================
// Campaign Validators
// =============================================================================

/// Validates the fields of a single campaign.
pub fn validate_campaign(campaign: &Campaign) -> ValidationResult<()> {
    match campaign {
        Campaign::Coupon(CouponCampaign::Fixed { amount }) => {
            if amount.is_negative() {
                return Err(ValidationError::CouponAmount);
            }
        }
        Campaign::Coupon(CouponCampaign::Percentage { percentage }) => {
            validate_percentage(*percentage, ValidationError::CouponPercentage)?;
        }
        Campaign::OnTop(OnTopCampaign::CategoryPercentage { percentage, .. }) => {
            validate_percentage(*percentage, ValidationError::OnTopPercentage)?;
        }
        Campaign::OnTop(OnTopCampaign::Points { points }) => {
            if *points < Decimal::ZERO {
                return Err(ValidationError::OnTopPoints);
            }
        }
        Campaign::Seasonal(seasonal) => {
            if seasonal.every_x <= Money::zero() {
                return Err(ValidationError::SeasonalEveryX);
            }
            if seasonal.discount_y.is_negative() {
                return Err(ValidationError::SeasonalDiscountY);
            }
        }
    }

    Ok(())
}

/// Percentages must lie in `[0, 100]`; out-of-range values are rejected,
/// not clamped.
fn validate_percentage(percentage: Decimal, err: ValidationError) -> ValidationResult<()> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(err);
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Rejects a list holding two campaigns of the same kind.
///
/// A duplicate is an error, never a silent override. When several kinds are
/// duplicated, the first in pipeline order is reported.
pub fn validate_one_per_kind(campaigns: &[Campaign]) -> ValidationResult<()> {
    for kind in CampaignKind::ALL {
        let count = campaigns.iter().filter(|c| c.kind() == kind).count();
        if count > 1 {
            return Err(ValidationError::DuplicateCampaign { kind });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
