//! Partnership Discount Resolver
//!
//! Resolves the effective unit price of a ticket sold under a partner
//! code. Pure function; absent partnership info leaves the price as-is.

use rust_decimal::prelude::*;
use shared::models::{DiscountType, PartnershipInfo};

use super::money::{rate_to_decimal, to_amount, to_decimal};

/// Resolve the effective unit price after an optional partnership discount.
///
/// - `Percent`: `round(base * (1 - value/100))`, half-up, clamped ≥ 0
/// - `Fixed`: `max(0, base - value)`
///
/// The discount multiplier is clamped to `[0, 1]` so a discount never
/// raises the price and discounts over 100% stop at free.
pub fn resolve_unit_price(base_price: i64, partnership: Option<&PartnershipInfo>) -> i64 {
    let Some(info) = partnership else {
        return base_price;
    };

    let base = to_decimal(base_price);
    let value = rate_to_decimal(info.discount_value);

    let discounted = match info.discount_type {
        DiscountType::Percent => {
            let multiplier =
                (Decimal::ONE - value / Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE);
            base * multiplier
        }
        DiscountType::Fixed => (base - value.max(Decimal::ZERO)).max(Decimal::ZERO),
    };

    to_amount(discounted)
}
