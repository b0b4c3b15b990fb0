//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE INTEGER CENTS PROBLEM (for discount chains)                        │
//! │    15% of 1 050.05 = 157.5075 → 157.51 rounded too early               │
//! │    The next stage then works on an already-rounded total               │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimals, rounded once at the end               │
//! │    Every stage sees the exact running total.                           │
//! │    Only the reported breakdown is rounded to cents.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricewise_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let subtotal = Money::from_units(2150);
//! let coupon = subtotal.percent_of(Decimal::from(10));
//! assert_eq!(coupon, Money::from_units(215));
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(10.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the store currency, held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values can exist mid-calculation; every
///   rule clamps them away before they reach a breakdown
/// - **Single field tuple struct**: serializes as a bare JSON number
/// - **No implicit rounding**: only [`Money::round_to_cents`] rounds
///
/// ## Where Money is Used
/// ```text
/// CartItem.unit_price ──► line total ──► subtotal
///                                           │
///            Coupon ◄───────────────────────┘
///              │
///              ▼
///            On-Top ──► Seasonal ──► round_to_cents ──► DiscountBreakdown
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    ///
    /// let price = Money::from_units(350);
    /// assert_eq!(price.to_string(), "350.00");
    /// ```
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Raises negative amounts to zero.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(-5).clamp_non_negative(), Money::zero());
    /// assert_eq!(Money::from_units(5).clamp_non_negative(), Money::from_units(5));
    /// ```
    #[inline]
    pub fn clamp_non_negative(self) -> Self {
        if self.is_negative() {
            Money::zero()
        } else {
            self
        }
    }

    /// Returns `percentage` percent of this amount, unrounded.
    ///
    /// The percentage is divided down first so a valid 0..=100 percentage
    /// never produces an intermediate larger than `self`. Out-of-range
    /// percentages saturate rather than overflow.
    pub fn percent_of(&self, percentage: Decimal) -> Money {
        Money(self.0.saturating_mul(percentage / Decimal::ONE_HUNDRED))
    }

    /// Multiplies by a quantity, returning `None` when the product leaves
    /// the decimal range.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Money::from_units(350);
    /// let line_total = unit_price.checked_times(Decimal::from(2)).unwrap();
    /// assert_eq!(line_total, Money::from_units(700));
    /// ```
    #[inline]
    pub fn checked_times(&self, quantity: Decimal) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Adds two amounts, pinning the result at the decimal range limits.
    #[inline]
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Rounds to 2 decimal places, half away from zero.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF UP AT THE CENT                                          │
    /// │                                                                     │
    /// │    157.505  → 157.51                                               │
    /// │    157.5049 → 157.50                                               │
    /// │    2382.5   → 2382.50                                              │
    /// │                                                                     │
    /// │  Breakdown figures are non-negative, so "away from zero" and       │
    /// │  "half up" agree.                                                   │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Applied to reported figures only; never between pipeline stages.
    #[inline]
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to cents with exactly two decimals ("387.00").
///
/// The currency code is left to the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cents = self.round_to_cents().0;
        cents.rescale(2);
        write!(f, "{}", cents)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
