//! # Calculate Route
//!
//! `POST /api/calculate`
//!
//! ## Decoding Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw bytes                                                              │
//! │     │  too large?        ──► 413 PAYLOAD_TOO_LARGE                      │
//! │     ▼                                                                   │
//! │  JSON object?            ──► 400 "Invalid JSON body."                   │
//! │     ▼                                                                   │
//! │  items[] + campaigns[]?  ──► 400 "Body must include 'items' and ..."    │
//! │     ▼                                                                   │
//! │  each element decodes?   ──► 400 "Invalid item in 'items' at index i."  │
//! │     ▼                                                                   │
//! │  pricewise_core::calculate_final_price                                  │
//! │     │  rule broken?      ──► 400 VALIDATION_ERROR                       │
//! │     ▼                                                                   │
//! │  200 CalculateResult                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Elements are decoded one by one so the error can name the bad index.
//! Element indexes here are 0-based; the core's item messages are 1-based.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::Json;
use pricewise_core::{
    calculate_final_price, CalculateResult, Campaign, CartItem, CoreError, Money,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult, ErrorCode};

/// A request body decoded into core types.
#[derive(Debug)]
pub struct CalculateRequest {
    pub items: Vec<CartItem>,
    pub campaigns: Vec<Campaign>,
}

/// Prices a cart.
pub async fn calculate_handler(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<CalculateResult>> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            warn!("Request body over the size limit");
            ApiError::new(ErrorCode::PayloadTooLarge, "Request body is too large.")
        } else {
            warn!(reason = %rejection.body_text(), "Failed to read request body");
            ApiError::invalid_request("Invalid JSON body.")
        }
    })?;

    let request = decode_request(&body).inspect_err(|e| {
        warn!(error = %e, "Rejected malformed calculate request");
    })?;

    debug!(
        items = request.items.len(),
        campaigns = request.campaigns.len(),
        "Calculating final price"
    );

    let result = calculate_final_price(&request.items, &request.campaigns).map_err(|e| {
        match &e {
            CoreError::Validation(v) => warn!(error = %v, "Calculation rejected"),
            other => warn!(error = %other, "Calculation failed"),
        }
        ApiError::from(e)
    })?;

    info!(
        subtotal = %result.breakdown.subtotal,
        final_total = %result.breakdown.final_total,
        warnings = result.warnings.as_ref().map_or(0, Vec::len),
        "Calculated final price"
    );

    Ok(Json(result))
}

// =============================================================================
// Body Decoding
// =============================================================================

/// Decodes a raw body into a [`CalculateRequest`].
///
/// Only the shape is checked here, plus the seasonal step rule in
/// [`accepts_campaign`]. Business rules (names, ranges, duplicates) are left
/// to the core validator.
pub fn decode_request(body: &[u8]) -> ApiResult<CalculateRequest> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::invalid_request("Invalid JSON body."))?;

    let Value::Object(mut fields) = value else {
        return Err(ApiError::invalid_request("Invalid JSON body."));
    };

    let (Some(Value::Array(items)), Some(Value::Array(campaigns))) =
        (fields.remove("items"), fields.remove("campaigns"))
    else {
        return Err(ApiError::invalid_request(
            "Body must include 'items' and 'campaigns' arrays.",
        ));
    };

    Ok(CalculateRequest {
        items: decode_elements(items, "item", "items", |_| true)?,
        campaigns: decode_elements(campaigns, "campaign", "campaigns", accepts_campaign)?,
    })
}

/// Shape rules enforced at the boundary on top of decoding.
///
/// A seasonal step below one whole unit is refused here as a malformed
/// campaign; the core validator alone only requires `everyX > 0`.
fn accepts_campaign(campaign: &Campaign) -> bool {
    match campaign {
        Campaign::Seasonal(seasonal) => seasonal.every_x >= Money::from_units(1),
        _ => true,
    }
}

fn decode_elements<T: DeserializeOwned>(
    values: Vec<Value>,
    noun: &str,
    field: &str,
    accept: fn(&T) -> bool,
) -> ApiResult<Vec<T>> {
    let invalid = |i: usize| {
        ApiError::invalid_request(format!("Invalid {noun} in '{field}' at index {i}."))
    };

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let element: T = serde_json::from_value(value).map_err(|e| {
                debug!(index = i, error = %e, "Element failed to decode");
                invalid(i)
            })?;
            if accept(&element) {
                Ok(element)
            } else {
                debug!(index = i, "Element refused by boundary rules");
                Err(invalid(i))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricewise_core::{Category, CouponCampaign, SeasonalCampaign};

    fn decode_err(body: &str) -> ApiError {
        decode_request(body.as_bytes()).unwrap_err()
    }

    #[test]
    fn test_decode_valid_body() {
        let body = r#"{
            "items": [
                { "name": "T-Shirt", "category": "Clothing", "unitPrice": 350, "quantity": 2 }
            ],
            "campaigns": [
                { "type": "coupon", "method": "fixed", "amount": 50 }
            ]
        }"#;
        let request = decode_request(body.as_bytes()).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].category, Category::Clothing);
        assert_eq!(request.items[0].unit_price, Money::from_units(350));
        assert_eq!(
            request.campaigns[0],
            Campaign::Coupon(CouponCampaign::Fixed {
                amount: Money::from_units(50)
            })
        );
    }

    #[test]
    fn test_not_json() {
        let err = decode_err("{not json");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "Invalid JSON body.");

        assert_eq!(decode_err("[1, 2]").message, "Invalid JSON body.");
        assert_eq!(decode_err("null").message, "Invalid JSON body.");
    }

    #[test]
    fn test_missing_arrays() {
        let expected = "Body must include 'items' and 'campaigns' arrays.";
        assert_eq!(decode_err(r#"{"items": []}"#).message, expected);
        assert_eq!(decode_err(r#"{"campaigns": []}"#).message, expected);
        assert_eq!(decode_err(r#"{"items": {}, "campaigns": []}"#).message, expected);
    }

    #[test]
    fn test_bad_element_names_index() {
        let body = r#"{
            "items": [
                { "name": "Hat", "category": "Accessories", "unitPrice": 250, "quantity": 1 },
                { "name": "Sock", "category": "Footwear", "unitPrice": 50, "quantity": 1 }
            ],
            "campaigns": []
        }"#;
        assert_eq!(decode_err(body).message, "Invalid item in 'items' at index 1.");

        let body = r#"{
            "items": [],
            "campaigns": [{ "type": "loyalty", "points": 5 }]
        }"#;
        assert_eq!(
            decode_err(body).message,
            "Invalid campaign in 'campaigns' at index 0."
        );
    }

    #[test]
    fn test_numeric_string_price_is_refused() {
        let body = r#"{
            "items": [{ "name": "Hat", "category": "Accessories", "unitPrice": "250", "quantity": 1 }],
            "campaigns": []
        }"#;
        assert_eq!(decode_err(body).message, "Invalid item in 'items' at index 0.");
    }

    #[test]
    fn test_seasonal_step_below_one_is_refused() {
        let body = r#"{
            "items": [],
            "campaigns": [
                { "type": "coupon", "method": "fixed", "amount": 10 },
                { "type": "seasonal", "everyX": 0.5, "discountY": 40 }
            ]
        }"#;
        let err = decode_err(body);
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "Invalid campaign in 'campaigns' at index 1.");

        let body = r#"{
            "items": [],
            "campaigns": [{ "type": "seasonal", "everyX": 1, "discountY": 40 }]
        }"#;
        let request = decode_request(body.as_bytes()).unwrap();
        assert_eq!(
            request.campaigns,
            vec![Campaign::Seasonal(SeasonalCampaign {
                every_x: Money::from_units(1),
                discount_y: Money::from_units(40),
            })]
        );
    }

    #[test]
    fn test_business_rules_pass_through_decoding() {
        // Decodes fine; rejected later by the core validator
        let body = r#"{
            "items": [{ "name": "", "category": "Clothing", "unitPrice": -1, "quantity": 0 }],
            "campaigns": [{ "type": "coupon", "method": "percentage", "percentage": 150 }]
        }"#;
        let request = decode_request(body.as_bytes()).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.campaigns.len(), 1);
    }
}
