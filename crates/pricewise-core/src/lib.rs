//! # pricewise-core: Pure Discount Engine for Pricewise
//!
//! This crate is the **heart** of Pricewise. It turns a cart and a list of
//! discount campaigns into an itemized price breakdown, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricewise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Cart UI (TypeScript)                         │   │
//! │  │    Product list ──► Cart ──► Discount picker ──► Result panel  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /api/calculate                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    pricing-api (axum)                           │   │
//! │  │    body decoding, status mapping, logging                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ pricewise-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   rules   │  │ validation│  │   │
//! │  │   │ CartItem  │  │   Money   │  │  coupon   │  │  items    │  │   │
//! │  │   │ Campaign  │  │  rounding │  │  on_top   │  │ campaigns │  │   │
//! │  │   │ Breakdown │  │           │  │ seasonal  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                         calculator                              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Cart items, campaigns, breakdown and result types
//! - [`money`] - Money type over exact decimals (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation run before any arithmetic
//! - [`rules`] - The coupon, on-top and seasonal discount stages
//! - [`calculator`] - Runs validation and the three stages in order
//!
//! ## Example Usage
//!
//! ```rust
//! use pricewise_core::{calculate_final_price, Campaign, CartItem, Category, CouponCampaign, Money};
//!
//! let items = vec![CartItem::new("T-Shirt", Category::Clothing, Money::from_units(350), 2)];
//! let campaigns = vec![Campaign::Coupon(CouponCampaign::Fixed {
//!     amount: Money::from_units(50),
//! })];
//!
//! let result = calculate_final_price(&items, &campaigns).unwrap();
//! assert_eq!(result.breakdown.final_total, Money::from_units(650));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate_final_price, calculate_with_set};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency code used in user-facing messages.
///
/// Amounts carry no currency of their own; the whole engine prices in a
/// single currency and never converts.
pub const CURRENCY_CODE: &str = "THB";

/// Share of the running total that a points redemption may cover, in percent.
pub const POINTS_CAP_PERCENT: u32 = 20;
