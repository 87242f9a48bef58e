//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are `i64` in the smallest currency unit. All intermediate
//! arithmetic is done using `Decimal`, then rounded half-up back to an
//! integer amount for storage/serialization.

use rust_decimal::prelude::*;
use shared::error::{CheckoutError, CheckoutResult};
use shared::models::TicketSelectionInput;

/// Maximum allowed unit price per ticket (Rp1,000,000,000)
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;
/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: u32 = 9_999;

/// Convert an integer amount to Decimal for calculation
#[inline]
pub fn to_decimal(amount: i64) -> Decimal {
    Decimal::from(amount)
}

/// Convert a rule/rate value to Decimal; non-finite values become 0
#[inline]
pub fn rate_to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to an integer amount, rounded half-up.
/// Amounts are never negative; negative results clamp to 0.
#[inline]
pub fn to_amount(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
        .max(0)
}

/// Validate a TicketSelectionInput before it enters a session
pub fn validate_selection(input: &TicketSelectionInput) -> CheckoutResult<()> {
    if input.unit_price < 0 {
        return Err(CheckoutError::InvalidOperation(format!(
            "unit_price must be non-negative, got {}",
            input.unit_price
        )));
    }
    if input.unit_price > MAX_UNIT_PRICE {
        return Err(CheckoutError::InvalidOperation(format!(
            "unit_price exceeds maximum allowed ({}), got {}",
            MAX_UNIT_PRICE, input.unit_price
        )));
    }

    let limit = input.limits.effective_limit().min(MAX_QUANTITY);
    if input.quantity > limit {
        return Err(CheckoutError::InvalidOperation(format!(
            "quantity exceeds order limit ({}), got {}",
            limit, input.quantity
        )));
    }

    if let Some(partnership) = &input.partnership {
        if !partnership.discount_value.is_finite() {
            return Err(CheckoutError::InvalidOperation(format!(
                "discount_value must be a finite number, got {}",
                partnership.discount_value
            )));
        }
        if partnership.discount_value < 0.0 {
            return Err(CheckoutError::InvalidOperation(format!(
                "discount_value must be non-negative, got {}",
                partnership.discount_value
            )));
        }
    }

    Ok(())
}
