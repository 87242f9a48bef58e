//! Invoice Calculator
//!
//! Composes ticket line items, the event fee policy, and the selected
//! payment method into an itemized invoice.
//!
//! # Calculation Steps
//! 1. Resolve each line's effective unit price (partnership discount)
//! 2. `subtotal` = Σ quantity × effective unit price (post-discount);
//!    `discount` = original subtotal - subtotal
//! 3. Admin fee, PB1 tax, and payment-method fee on the subtotal
//! 4. `grand_total` = subtotal + admin fee + tax + payment-method fee
//!    (discount is already inside the subtotal, never subtracted again)
//!
//! The computation is synchronous, total, and stateless; it is recomputed
//! in full on every selection or payment-method change.

use rust_decimal::prelude::*;
use shared::models::{FeePolicy, Invoice, InvoiceLine, PaymentMethod, TicketLineItem};

use super::discount::resolve_unit_price;
use super::fee::{classify_admin_fee_rule, classify_payment_fee_rule, evaluate_fee};
use super::money::{rate_to_decimal, to_amount, to_decimal};

/// Compute an itemized invoice from the current selections.
///
/// `payment_method` is the currently selected method, if any; no selection
/// means no payment-method fee. Zero-quantity lines contribute nothing but
/// stay in the breakdown.
pub fn compute_invoice(
    line_items: &[TicketLineItem],
    fee_policy: &FeePolicy,
    payment_method: Option<&PaymentMethod>,
) -> Invoice {
    let mut lines = Vec::with_capacity(line_items.len());
    let mut subtotal: i64 = 0;
    let mut original_subtotal: i64 = 0;

    for item in line_items {
        let effective = resolve_unit_price(item.unit_price, item.partnership.as_ref());
        let quantity = i64::from(item.quantity);
        let line_total = quantity * effective;
        let line_original = quantity * item.unit_price;

        subtotal += line_total;
        original_subtotal += line_original;

        lines.push(InvoiceLine {
            ticket_id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            effective_unit_price: effective,
            line_total,
            line_discount: line_original - line_total,
        });
    }

    let discount = original_subtotal - subtotal;

    let admin_fee = evaluate_fee(
        fee_policy.admin_fee_rule,
        subtotal,
        classify_admin_fee_rule(fee_policy.admin_fee_rule),
    );

    // PB1 is always a percentage of the subtotal
    let tax_rate = rate_to_decimal(fee_policy.tax_rate_percent).max(Decimal::ZERO);
    let tax = to_amount(to_decimal(subtotal) * tax_rate / Decimal::ONE_HUNDRED);

    let payment_method_fee = match payment_method {
        Some(method) => evaluate_fee(
            method.fee_rule,
            subtotal,
            classify_payment_fee_rule(method.fee_rule),
        ),
        None => 0,
    };

    let grand_total = subtotal + admin_fee + tax + payment_method_fee;

    Invoice {
        original_subtotal,
        subtotal,
        discount,
        admin_fee,
        tax,
        payment_method_fee,
        grand_total,
        lines,
    }
}

// ==================== Tests ====================
