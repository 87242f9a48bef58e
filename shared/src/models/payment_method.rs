//! Payment Method Model

use serde::{Deserialize, Serialize};

/// Payment channel enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentChannel {
    VirtualAccount,
    Ewallet,
    CreditCard,
    RetailOutlet,
    Qris,
}

/// Payment method option offered at checkout.
///
/// The fee rule travels with the method so every surface computing the
/// payment-method fee uses the same value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    pub code: String,
    pub name: String,
    pub channel: PaymentChannel,
    /// Fee rule (values below 1 are percentages, 1 and up fixed amounts;
    /// 0.5 = 0.5%, 4000 = Rp4,000)
    #[serde(default)]
    pub fee_rule: f64,
}
