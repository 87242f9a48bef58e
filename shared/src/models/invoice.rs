//! Invoice Model

use serde::{Deserialize, Serialize};

/// Itemized line in a computed invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceLine {
    pub ticket_id: String,
    pub name: String,
    pub quantity: u32,
    /// Configured unit price before partnership discount
    pub unit_price: i64,
    /// Unit price after partnership discount
    pub effective_unit_price: i64,
    /// quantity × effective_unit_price
    pub line_total: i64,
    /// quantity × (unit_price - effective_unit_price)
    pub line_discount: i64,
}

/// Computed invoice - derived state, immutable once computed.
///
/// `subtotal` is the post-discount figure; fees are computed on it.
/// Invariants:
/// - `grand_total = subtotal + admin_fee + tax + payment_method_fee`
/// - `grand_total = original_subtotal - discount + admin_fee + tax + payment_method_fee`
/// - every amount is non-negative
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    /// Pre-discount subtotal (Σ quantity × unit_price)
    pub original_subtotal: i64,
    /// Post-discount subtotal (Σ quantity × effective_unit_price)
    pub subtotal: i64,
    /// original_subtotal - subtotal
    pub discount: i64,
    pub admin_fee: i64,
    pub tax: i64,
    pub payment_method_fee: i64,
    pub grand_total: i64,
    /// Per-ticket breakdown for display
    pub lines: Vec<InvoiceLine>,
}
