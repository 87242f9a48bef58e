//! Checkout Session
//!
//! Owns the ticket selections for one checkout, the event fee policy, and
//! the selected payment method, and keeps the invoice in sync: every
//! mutation ends with one synchronous `compute_invoice` pass.
//!
//! Sessions are plain values with a single owner; all state dies with the
//! value. Quantity changes are clamped to
//! `[0, min(max_order_quantity, available_inventory)]`.

use shared::error::{CheckoutError, CheckoutResult};
use shared::models::{FeePolicy, Invoice, PaymentMethod, TicketLineItem, TicketSelectionInput};
use shared::util::now_millis;
use uuid::Uuid;

use crate::pricing::{compute_invoice, money};


/// Checkout session state
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    id: String,
    created_at: i64,
    fee_policy: FeePolicy,
    payment_method: Option<PaymentMethod>,
    items: Vec<TicketLineItem>,
    invoice: Invoice,
}

impl CheckoutSession {
    /// Create an empty session for an event's fee policy
    pub fn new(fee_policy: FeePolicy) -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            created_at: now_millis(),
            fee_policy,
            payment_method: None,
            items: Vec::new(),
            invoice: Invoice::default(),
        };
        session.recompute();
        session
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn items(&self) -> &[TicketLineItem] {
        &self.items
    }

    /// The invoice for the current selections
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_method.as_ref()
    }

    // ==================== Mutations ====================

    /// Add a ticket selection. Duplicate ticket ids are rejected.
    pub fn add_ticket(&mut self, input: TicketSelectionInput) -> CheckoutResult<()> {
        money::validate_selection(&input)?;

        if self.items.iter().any(|item| item.id == input.ticket_id) {
            return Err(CheckoutError::DuplicateTicket(input.ticket_id));
        }

        self.items.push(TicketLineItem {
            id: input.ticket_id,
            name: input.name,
            unit_price: input.unit_price,
            quantity: input.quantity,
            partnership: input.partnership,
            limits: input.limits,
        });
        self.recompute();
        Ok(())
    }

    /// Increment a ticket's quantity, clamped to its effective limit.
    /// Returns the new quantity.
    pub fn increment(&mut self, ticket_id: &str) -> CheckoutResult<u32> {
        let item = self.find_item_mut(ticket_id)?;
        let limit = item.limits.effective_limit().min(money::MAX_QUANTITY);
        if item.quantity < limit {
            item.quantity += 1;
        }
        let quantity = item.quantity;
        self.recompute();
        Ok(quantity)
    }

    /// Decrement a ticket's quantity, floored at zero. Returns the new
    /// quantity. The line stays selected at quantity 0.
    pub fn decrement(&mut self, ticket_id: &str) -> CheckoutResult<u32> {
        let item = self.find_item_mut(ticket_id)?;
        item.quantity = item.quantity.saturating_sub(1);
        let quantity = item.quantity;
        self.recompute();
        Ok(quantity)
    }

    /// Select (or clear) the payment method
    pub fn select_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
        self.recompute();
    }

    /// Replace the fee policy (event configuration reload)
    pub fn set_fee_policy(&mut self, fee_policy: FeePolicy) {
        self.fee_policy = fee_policy;
        self.recompute();
    }

    // ==================== Internal ====================

    fn find_item_mut(&mut self, ticket_id: &str) -> CheckoutResult<&mut TicketLineItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == ticket_id)
            .ok_or_else(|| CheckoutError::TicketNotFound(ticket_id.to_string()))
    }

    fn recompute(&mut self) {
        self.invoice =
            compute_invoice(&self.items, &self.fee_policy, self.payment_method.as_ref());
        tracing::debug!(
            session_id = %self.id,
            subtotal = self.invoice.subtotal,
            grand_total = self.invoice.grand_total,
            "Invoice recomputed"
        );
    }
}
