//! Checkout error types
//!
//! Pricing is total over its inputs and cannot fail; errors exist only at
//! the session boundary where selections are validated and looked up.

use thiserror::Error;

/// Session-level errors
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Ticket already selected: {0}")]
    DuplicateTicket(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Checkout-level Result type
pub type CheckoutResult<T> = Result<T, CheckoutError>;
