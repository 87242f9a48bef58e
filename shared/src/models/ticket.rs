//! Ticket Selection Models

use serde::{Deserialize, Serialize};

use super::partnership::PartnershipInfo;

/// Per-ticket ordering bounds from event configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLimits {
    /// Maximum quantity per order
    pub max_order_quantity: u32,
    /// Remaining inventory for this ticket type
    pub available_inventory: u32,
}

impl OrderLimits {
    /// Upper bound for a line item quantity
    pub fn effective_limit(&self) -> u32 {
        self.max_order_quantity.min(self.available_inventory)
    }
}

/// Ticket line item held by a checkout session.
///
/// Quantity is mutated only through the session's increment/decrement,
/// which clamp to `[0, limits.effective_limit()]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketLineItem {
    /// Ticket type ID
    pub id: String,
    /// Ticket name
    pub name: String,
    /// Unit price before partnership discount
    pub unit_price: i64,
    /// Selected quantity
    pub quantity: u32,
    /// Partnership terms, if sold under a partner code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership: Option<PartnershipInfo>,
    /// Ordering bounds
    pub limits: OrderLimits,
}

/// Ticket selection input - for adding a ticket to a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSelectionInput {
    pub ticket_id: String,
    pub name: String,
    pub unit_price: i64,
    /// Initial quantity
    #[serde(default)]
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership: Option<PartnershipInfo>,
    pub limits: OrderLimits,
}
