//! # Error Types
//!
//! Domain-specific error types for pricewise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricewise-core errors (this file)                                     │
//! │  ├── CoreError        - Anything that aborts a calculation             │
//! │  └── ValidationError  - Input rejected before any arithmetic           │
//! │                                                                         │
//! │  pricing-api errors (in app)                                           │
//! │  └── ApiError         - What the HTTP caller sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP 4xx/5xx           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (1-based item index, campaign kind)
//! 3. Errors are enum variants, never String
//! 4. Soft caps (points) are warnings on the result, never errors

use thiserror::Error;

use crate::types::CampaignKind;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that abort a price calculation.
///
/// No partial breakdown is ever returned alongside one of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A monetary value left the range of exact decimal arithmetic.
    ///
    /// ## When This Occurs
    /// - Absurdly large unit prices or quantities whose line totals or
    ///   subtotal cannot be represented
    #[error("Cart {figure} exceeds the supported range.")]
    AmountOutOfRange { figure: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Item indexes are 1-based so messages can be shown to a shopper as-is.
/// Checks run in a fixed order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item name is empty or whitespace.
    #[error("Item #{index} name is required.")]
    ItemNameRequired { index: usize },

    /// Item unit price is negative.
    #[error("Item #{index} unitPrice must be a number >= 0.")]
    ItemUnitPrice { index: usize },

    /// Item quantity is zero, negative or fractional.
    #[error("Item #{index} quantity must be an integer >= 1.")]
    ItemQuantity { index: usize },

    #[error("Coupon fixed amount must be >= 0.")]
    CouponAmount,

    #[error("Coupon percentage must be between 0 and 100.")]
    CouponPercentage,

    #[error("On Top category percentage must be between 0 and 100.")]
    OnTopPercentage,

    #[error("On Top points must be a number >= 0.")]
    OnTopPoints,

    #[error("Seasonal everyX must be a number > 0.")]
    SeasonalEveryX,

    #[error("Seasonal discountY must be a number >= 0.")]
    SeasonalDiscountY,

    /// More than one campaign of the same kind was supplied.
    ///
    /// ## User Workflow
    /// ```text
    /// Campaigns: [coupon 50 THB, coupon 10%]
    ///      │
    ///      ▼
    /// DuplicateCampaign { kind: Coupon }
    ///      │
    ///      ▼
    /// UI shows: "Only one coupon campaign is allowed."
    /// ```
    #[error("Only one {kind} campaign is allowed.")]
    DuplicateCampaign { kind: CampaignKind },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_messages_use_one_based_index() {
        let err = ValidationError::ItemQuantity { index: 3 };
        assert_eq!(err.to_string(), "Item #3 quantity must be an integer >= 1.");

        let err = ValidationError::ItemNameRequired { index: 1 };
        assert_eq!(err.to_string(), "Item #1 name is required.");
    }

    #[test]
    fn test_duplicate_campaign_messages() {
        let err = ValidationError::DuplicateCampaign {
            kind: CampaignKind::OnTop,
        };
        assert_eq!(err.to_string(), "Only one on_top campaign is allowed.");

        let err = ValidationError::DuplicateCampaign {
            kind: CampaignKind::Seasonal,
        };
        assert_eq!(err.to_string(), "Only one seasonal campaign is allowed.");
    }

    #[test]
    fn test_validation_converts_to_core_error_with_same_message() {
        let validation_err = ValidationError::CouponPercentage;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Coupon percentage must be between 0 and 100."
        );
    }
}
