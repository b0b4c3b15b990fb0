//! # Domain Types
//!
//! Value objects that flow through one price calculation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT                                                                  │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │    CartItem     │   │  Campaign  (tag: "type")                 │    │
//! │  │  ─────────────  │   │  ─────────────────────────────────────   │    │
//! │  │  id?            │   │  Coupon   ── Fixed │ Percentage          │    │
//! │  │  name           │   │  OnTop    ── CategoryPercentage │ Points │    │
//! │  │  category       │   │  Seasonal ── everyX, discountY           │    │
//! │  │  unitPrice      │   └──────────────────────────────────────────┘    │
//! │  │  quantity       │                      │ validate + select          │
//! │  └─────────────────┘                      ▼                            │
//! │                               ┌──────────────────────┐                 │
//! │                               │     CampaignSet      │                 │
//! │                               │  coupon? onTop?      │                 │
//! │                               │  seasonal?           │                 │
//! │                               └──────────┬───────────┘                 │
//! │                                          ▼ AppliedCampaigns (tagged)   │
//! │  OUTPUT                                                                 │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │ CalculateResult { breakdown: DiscountBreakdown,               │     │
//! │  │                   applied: AppliedCampaigns, warnings? }      │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is created fresh per calculation and never persisted.
//! JSON field names are camelCase to match the cart UI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. Closed set; anything else is rejected at decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Clothing,
    Accessories,
    Electronics,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Electronics => "Electronics",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart as supplied by the caller.
///
/// `quantity` travels as a decimal so that `1.5` reaches validation and is
/// reported as a quantity error instead of an opaque decoding failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Optional caller-side identifier, echoed nowhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,

    /// Display name; must not be blank.
    pub name: String,

    pub category: Category,

    /// Price of one unit, >= 0.
    pub unit_price: Money,

    /// Whole number of units, >= 1.
    #[ts(type = "number")]
    pub quantity: Decimal,
}

impl CartItem {
    /// Creates an item without an id.
    pub fn new(name: impl Into<String>, category: Category, unit_price: Money, quantity: u32) -> Self {
        CartItem {
            id: None,
            name: name.into(),
            category,
            unit_price,
            quantity: Decimal::from(quantity),
        }
    }

    /// Returns `unit_price × quantity`, or `None` if it cannot be represented.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_times(self.quantity)
    }
}

// =============================================================================
// Campaigns
// =============================================================================

/// Coupon campaign, applied first to the cart subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "method", rename_all = "snake_case")]
#[ts(export)]
pub enum CouponCampaign {
    /// Fixed amount off, never more than the subtotal.
    Fixed { amount: Money },

    /// Percentage off the subtotal, 0..=100.
    Percentage {
        #[ts(type = "number")]
        percentage: Decimal,
    },
}

/// On-top campaign, applied to the post-coupon total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "method", rename_all = "snake_case")]
#[ts(export)]
pub enum OnTopCampaign {
    /// Percentage off the subtotal of one category's items.
    CategoryPercentage {
        category: Category,
        #[ts(type = "number")]
        percentage: Decimal,
    },

    /// Loyalty points redeemed 1:1 against the total, capped at
    /// [`POINTS_CAP_PERCENT`](crate::POINTS_CAP_PERCENT) of it.
    Points {
        #[ts(type = "number")]
        points: Decimal,
    },
}

/// Seasonal campaign: `discount_y` off for every full `every_x` spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SeasonalCampaign {
    pub every_x: Money,
    pub discount_y: Money,
}

/// A campaign as it arrives in the interchange list.
///
/// ## Wire Format
/// ```json
/// { "type": "coupon", "method": "percentage", "percentage": 10 }
/// { "type": "on_top", "method": "points", "points": 500 }
/// { "type": "seasonal", "everyX": 300, "discountY": 40 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Campaign {
    Coupon(CouponCampaign),
    OnTop(OnTopCampaign),
    Seasonal(SeasonalCampaign),
}

impl Campaign {
    /// Returns which pipeline stage this campaign belongs to.
    pub fn kind(&self) -> CampaignKind {
        match self {
            Campaign::Coupon(_) => CampaignKind::Coupon,
            Campaign::OnTop(_) => CampaignKind::OnTop,
            Campaign::Seasonal(_) => CampaignKind::Seasonal,
        }
    }
}

/// The three campaign kinds, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CampaignKind {
    Coupon,
    OnTop,
    Seasonal,
}

impl CampaignKind {
    /// All kinds in the order their stages run.
    pub const ALL: [CampaignKind; 3] = [
        CampaignKind::Coupon,
        CampaignKind::OnTop,
        CampaignKind::Seasonal,
    ];

    /// The wire tag for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CampaignKind::Coupon => "coupon",
            CampaignKind::OnTop => "on_top",
            CampaignKind::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for CampaignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Campaign Set
// =============================================================================

/// At most one campaign per kind, the typed form of a campaign list.
///
/// In-process only; the wire echo of a selection is [`AppliedCampaigns`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignSet {
    pub coupon: Option<CouponCampaign>,
    pub on_top: Option<OnTopCampaign>,
    pub seasonal: Option<SeasonalCampaign>,
}

impl CampaignSet {
    /// Picks the first campaign of each kind from a list.
    ///
    /// This is a lookup, not conflict resolution: duplicates are rejected by
    /// [`validate`](crate::validation::validate) before this runs.
    pub fn select(campaigns: &[Campaign]) -> Self {
        let mut set = CampaignSet::default();
        for campaign in campaigns {
            match campaign {
                Campaign::Coupon(c) if set.coupon.is_none() => set.coupon = Some(c.clone()),
                Campaign::OnTop(c) if set.on_top.is_none() => set.on_top = Some(c.clone()),
                Campaign::Seasonal(c) if set.seasonal.is_none() => {
                    set.seasonal = Some(c.clone())
                }
                _ => {}
            }
        }
        set
    }

    /// Flattens back into the interchange list, in pipeline order.
    pub fn to_campaigns(&self) -> Vec<Campaign> {
        let applied = AppliedCampaigns::from(self);
        [applied.coupon, applied.on_top, applied.seasonal]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl From<CouponCampaign> for Campaign {
    fn from(coupon: CouponCampaign) -> Self {
        Campaign::Coupon(coupon)
    }
}

impl From<OnTopCampaign> for Campaign {
    fn from(on_top: OnTopCampaign) -> Self {
        Campaign::OnTop(on_top)
    }
}

impl From<SeasonalCampaign> for Campaign {
    fn from(seasonal: SeasonalCampaign) -> Self {
        Campaign::Seasonal(seasonal)
    }
}

/// The `applied` echo of a [`CalculateResult`].
///
/// Each entry is the full tagged [`Campaign`], so a client can send it back
/// unchanged in a later request.
///
/// ```json
/// { "coupon": { "type": "coupon", "method": "fixed", "amount": 50 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppliedCampaigns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub coupon: Option<Campaign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub on_top: Option<Campaign>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub seasonal: Option<Campaign>,
}

impl From<&CampaignSet> for AppliedCampaigns {
    fn from(set: &CampaignSet) -> Self {
        AppliedCampaigns {
            coupon: set.coupon.clone().map(Campaign::from),
            on_top: set.on_top.clone().map(Campaign::from),
            seasonal: set.seasonal.clone().map(Campaign::from),
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// Per-stage figures of one calculation, each rounded to cents.
///
/// ## Stage Layout
/// ```text
/// subtotal
///   − couponDiscount   = afterCoupon
///   − onTopDiscount    = afterOnTop
///   − seasonalDiscount = afterSeasonal = finalTotal
/// ```
///
/// Each figure is rounded on its own, so the rounded discounts need not
/// subtract exactly to the rounded totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountBreakdown {
    pub subtotal: Money,

    pub coupon_discount: Money,
    pub after_coupon: Money,

    pub on_top_discount: Money,
    pub after_on_top: Money,

    pub seasonal_discount: Money,
    pub after_seasonal: Money,

    pub final_total: Money,
}

/// The outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculateResult {
    pub breakdown: DiscountBreakdown,

    /// Which campaign of each kind was used.
    pub applied: AppliedCampaigns,

    /// Soft-cap notices; omitted when nothing was capped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub warnings: Option<Vec<String>>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_campaign_wire_format() {
        let campaigns: Vec<Campaign> = serde_json::from_value(json!([
            { "type": "coupon", "method": "fixed", "amount": 50 },
            { "type": "coupon", "method": "percentage", "percentage": 10 },
            { "type": "on_top", "method": "category_percentage", "category": "Clothing", "percentage": 15 },
            { "type": "on_top", "method": "points", "points": 500 },
            { "type": "seasonal", "everyX": 300, "discountY": 40 }
        ]))
        .unwrap();

        assert_eq!(
            campaigns,
            vec![
                Campaign::Coupon(CouponCampaign::Fixed {
                    amount: Money::from_units(50)
                }),
                Campaign::Coupon(CouponCampaign::Percentage { percentage: dec!(10) }),
                Campaign::OnTop(OnTopCampaign::CategoryPercentage {
                    category: Category::Clothing,
                    percentage: dec!(15),
                }),
                Campaign::OnTop(OnTopCampaign::Points { points: dec!(500) }),
                Campaign::Seasonal(SeasonalCampaign {
                    every_x: Money::from_units(300),
                    discount_y: Money::from_units(40),
                }),
            ]
        );
    }

    #[test]
    fn test_campaign_serializes_with_both_tags() {
        let campaign = Campaign::OnTop(OnTopCampaign::Points { points: dec!(100) });
        let value = serde_json::to_value(&campaign).unwrap();
        assert_eq!(value["type"], "on_top");
        assert_eq!(value["method"], "points");
        assert_eq!(value["points"].as_f64(), Some(100.0));
    }

    #[test]
    fn test_unknown_category_is_rejected_at_decoding() {
        let item = serde_json::from_value::<CartItem>(json!({
            "name": "Apple", "category": "Food", "unitPrice": 10, "quantity": 1
        }));
        assert!(item.is_err());
    }

    #[test]
    fn test_cart_item_accepts_optional_id_and_fractional_quantity() {
        let item: CartItem = serde_json::from_value(json!({
            "id": "p1", "name": "T-Shirt", "category": "Clothing", "unitPrice": 350, "quantity": 1.5
        }))
        .unwrap();
        assert_eq!(item.id.as_deref(), Some("p1"));
        assert_eq!(item.quantity, dec!(1.5));
    }

    #[test]
    fn test_select_takes_one_per_kind() {
        let campaigns = vec![
            Campaign::Seasonal(SeasonalCampaign {
                every_x: Money::from_units(300),
                discount_y: Money::from_units(40),
            }),
            Campaign::Coupon(CouponCampaign::Fixed {
                amount: Money::from_units(50),
            }),
        ];
        let set = CampaignSet::select(&campaigns);
        assert!(set.coupon.is_some());
        assert!(set.on_top.is_none());
        assert!(set.seasonal.is_some());

        // Flattening restores pipeline order
        let kinds: Vec<_> = set.to_campaigns().iter().map(Campaign::kind).collect();
        assert_eq!(kinds, vec![CampaignKind::Coupon, CampaignKind::Seasonal]);
    }

    #[test]
    fn test_empty_applied_serializes_as_empty_object() {
        let value = serde_json::to_value(AppliedCampaigns::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_applied_entries_echo_the_input_campaign() {
        let input = json!([
            { "type": "coupon", "method": "fixed", "amount": 10.0 },
            { "type": "on_top", "method": "points", "points": 68.0 },
            { "type": "seasonal", "everyX": 300.0, "discountY": 40.0 }
        ]);
        let campaigns: Vec<Campaign> = serde_json::from_value(input.clone()).unwrap();

        let applied = AppliedCampaigns::from(&CampaignSet::select(&campaigns));
        let value = serde_json::to_value(&applied).unwrap();
        assert_eq!(value["coupon"], input[0]);
        assert_eq!(value["onTop"], input[1]);
        assert_eq!(value["seasonal"], input[2]);

        // An echoed entry decodes back into the same campaign
        let echoed: Campaign = serde_json::from_value(value["coupon"].clone()).unwrap();
        assert_eq!(echoed, campaigns[0]);
    }
}
