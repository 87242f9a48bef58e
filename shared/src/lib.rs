//! Shared types for the ticketing checkout core
//!
//! Domain models used across the checkout crates: ticket selections,
//! partnership info, fee policy, payment methods, and the computed invoice.
//! Amounts are integer IDR (smallest currency unit).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{CheckoutError, CheckoutResult};
pub use serde::{Deserialize, Serialize};
