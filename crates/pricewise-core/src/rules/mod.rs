//! # Discount Rules
//!
//! The three pipeline stages and the helpers they share.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fixed Stage Order                                  │
//! │                                                                         │
//! │  subtotal ──► [ coupon ] ──► [ on_top ] ──► [ seasonal ] ──► final     │
//! │                   │              │               │                      │
//! │              fixed / %     category % /     every X → Y off            │
//! │                            points (cap 20%)                             │
//! │                                                                         │
//! │  Each stage:                                                            │
//! │    base     = max(0, total_before)                                      │
//! │    discount = clamp(raw discount, 0, base)                              │
//! │    after    = max(0, base − discount)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stages are independent pure functions. The calculator threads the
//! unrounded running total from one stage into the next.

pub mod coupon;
pub mod on_top;
pub mod seasonal;

pub use coupon::apply_coupon;
pub use on_top::apply_on_top;
pub use seasonal::apply_seasonal;

use crate::money::Money;
use crate::types::{CartItem, Category};

/// What one stage did to the running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    /// Amount taken off, `0 <= discount <= base`.
    pub discount: Money,

    /// Running total handed to the next stage.
    pub total_after: Money,

    /// Soft-cap notice raised by this stage, if any.
    pub warning: Option<String>,
}

impl StageOutcome {
    /// A stage with no campaign leaves the (clamped) base untouched.
    pub(crate) fn untouched(base: Money) -> Self {
        StageOutcome {
            discount: Money::zero(),
            total_after: base,
            warning: None,
        }
    }

    /// Builds the outcome of taking `discount` off `base`.
    ///
    /// The discount is pinned into `[0, base]` here, so no stage can push
    /// the total below zero or above its input.
    pub(crate) fn from_discount(base: Money, discount: Money) -> Self {
        let discount = discount.clamp_non_negative().min(base);
        StageOutcome {
            discount,
            total_after: (base - discount).clamp_non_negative(),
            warning: None,
        }
    }

    pub(crate) fn with_warning(mut self, warning: String) -> Self {
        self.warning = Some(warning);
        self
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Sum of `unit_price × quantity` over all items.
///
/// Returns `None` when a line total or the sum leaves the decimal range.
pub fn cart_subtotal(items: &[CartItem]) -> Option<Money> {
    items
        .iter()
        .try_fold(Money::zero(), |sum, item| sum.checked_add(item.line_total()?))
}

/// Sum of `unit_price × quantity` over the items of one category.
///
/// Zero when no item matches. Saturates instead of failing: it never
/// exceeds [`cart_subtotal`], which the calculator checks first.
pub fn category_subtotal(items: &[CartItem], category: Category) -> Money {
    items
        .iter()
        .filter(|item| item.category == category)
        .fold(Money::zero(), |sum, item| {
            let line = item
                .line_total()
                .unwrap_or_else(|| Money::new(rust_decimal::Decimal::MAX));
            sum.saturating_add(line)
        })
}
