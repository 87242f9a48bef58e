//! Pricing Module
//!
//! This module computes checkout invoices: partnership discounts on ticket
//! unit prices, fee evaluation (admin fee, PB1 tax, payment-method fee),
//! and the itemized grand total.

mod discount;
mod fee;
mod invoice_calculator;
pub mod money;

pub use discount::*;
pub use fee::*;
pub use invoice_calculator::*;
