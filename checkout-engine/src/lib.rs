//! Checkout Engine - pricing core for the ticketing platform
//!
//! # Modules
//!
//! - **pricing**: partnership discount resolution, fee evaluation, and
//!   invoice computation
//! - **session**: checkout session owning ticket selections and keeping
//!   the invoice in sync
//! - **countdown**: checkout countdown timer
//!
//! All monetary amounts are `i64` in the smallest currency unit (IDR);
//! intermediate arithmetic uses `rust_decimal` with half-up rounding.

pub mod countdown;
pub mod pricing;
pub mod session;

// Re-export public types
pub use countdown::Countdown;
pub use pricing::{FeeBasis, compute_invoice, evaluate_fee, resolve_unit_price};
pub use session::CheckoutSession;

// Re-export shared types for convenience
pub use shared::models::{
    FeePolicy, Invoice, PartnershipInfo, PaymentMethod, TicketLineItem, TicketSelectionInput,
};
pub use shared::{CheckoutError, CheckoutResult};
