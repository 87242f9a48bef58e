//! Fee Policy Model

use serde::{Deserialize, Serialize};

/// Event-level fee configuration.
///
/// Rule values carry the percent-vs-fixed convention documented in the
/// engine's fee module: admin fee rules up to 100 are percentages of the
/// subtotal, larger values are fixed amounts. The tax rate is always a
/// percentage and is always passed explicitly, never read from ambient
/// configuration. Absent fields deserialize to 0 (no fee, no tax).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeePolicy {
    /// Admin fee rule (10 = 10%, 5000 = Rp5,000)
    #[serde(default)]
    pub admin_fee_rule: f64,
    /// PB1 tax rate as a percentage of the subtotal (10 = 10%)
    #[serde(default)]
    pub tax_rate_percent: f64,
}
