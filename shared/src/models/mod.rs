//! Data models
//!
//! Shared between the checkout engine and API consumers. Fee rules,
//! partnership terms, and payment methods arrive from event
//! configuration; the invoice is derived state computed by the engine.

pub mod fee_policy;
pub mod invoice;
pub mod partnership;
pub mod payment_method;
pub mod ticket;

// Re-exports
pub use fee_policy::*;
pub use invoice::*;
pub use partnership::*;
pub use payment_method::*;
pub use ticket::*;
