//! Partnership Discount Model

use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percent,
    Fixed,
}

/// Partnership terms attached to a ticket sold under a partner code.
///
/// Immutable, sourced from event configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnershipInfo {
    pub partner_code: String,
    pub partner_name: String,
    pub discount_type: DiscountType,
    /// Discount value (percent: 20 = 20%, fixed: 5000 = Rp5,000)
    pub discount_value: f64,
}
