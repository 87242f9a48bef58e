//! Fee Evaluator
//!
//! Fee rules arrive as plain numbers whose interpretation (percentage vs
//! fixed amount) depends on the fee type. Each convention is classified in
//! exactly one function here; call sites never re-derive the threshold.

use rust_decimal::prelude::*;

use super::money::{rate_to_decimal, to_amount, to_decimal};

/// How a fee rule value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeBasis {
    /// Rule is a percentage of the base amount
    Percent,
    /// Rule is a fixed currency amount
    Fixed,
}

/// Admin fee convention: values up to 100 are percentages of the subtotal,
/// anything larger is a fixed amount (10 = 10%, 5000 = Rp5,000).
pub fn classify_admin_fee_rule(rule: f64) -> FeeBasis {
    if rule <= 100.0 {
        FeeBasis::Percent
    } else {
        FeeBasis::Fixed
    }
}

/// Payment-method fee convention: values below 1 are percentages, 1 and up
/// are fixed amounts (0.5 = 0.5%, 4000 = Rp4,000).
pub fn classify_payment_fee_rule(rule: f64) -> FeeBasis {
    if rule < 1.0 {
        FeeBasis::Percent
    } else {
        FeeBasis::Fixed
    }
}

/// Evaluate a fee rule against a base amount.
///
/// - `Percent`: `round(base * rule / 100)`, half-up
/// - `Fixed`: `round(rule)`, half-up
///
/// A zero base forces the fee to 0 regardless of rule and basis, fixed
/// rules included. Negative rules evaluate to 0.
pub fn evaluate_fee(rule: f64, base: i64, basis: FeeBasis) -> i64 {
    if base == 0 {
        return 0;
    }

    let value = rate_to_decimal(rule).max(Decimal::ZERO);
    let amount = match basis {
        FeeBasis::Percent => to_decimal(base) * value / Decimal::ONE_HUNDRED,
        FeeBasis::Fixed => value,
    };

    to_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Classification Tests ====================

    #[test]
    fn test_admin_fee_classification_boundary() {
        assert_eq!(classify_admin_fee_rule(10.0), FeeBasis::Percent);
        assert_eq!(classify_admin_fee_rule(100.0), FeeBasis::Percent);
        assert_eq!(classify_admin_fee_rule(100.5), FeeBasis::Fixed);
        assert_eq!(classify_admin_fee_rule(5000.0), FeeBasis::Fixed);
    }

    #[test]
    fn test_payment_fee_classification_boundary() {
        assert_eq!(classify_payment_fee_rule(0.5), FeeBasis::Percent);
        assert_eq!(classify_payment_fee_rule(0.999), FeeBasis::Percent);
        assert_eq!(classify_payment_fee_rule(1.0), FeeBasis::Fixed);
        assert_eq!(classify_payment_fee_rule(4000.0), FeeBasis::Fixed);
    }

    // ==================== Evaluation Tests ====================

    #[test]
    fn test_percent_fee() {
        // 10% of Rp200,000 = Rp20,000
        assert_eq!(evaluate_fee(10.0, 200_000, FeeBasis::Percent), 20_000);
    }

    #[test]
    fn test_fixed_fee() {
        assert_eq!(evaluate_fee(5000.0, 200_000, FeeBasis::Fixed), 5_000);
    }

    #[test]
    fn test_percent_fee_rounds_half_up() {
        // 0.5% of Rp12,345 = 61.725 → 62
        assert_eq!(evaluate_fee(0.5, 12_345, FeeBasis::Percent), 62);
        // 10% of Rp15 = 1.5 → 2
        assert_eq!(evaluate_fee(10.0, 15, FeeBasis::Percent), 2);
    }

    #[test]
    fn test_zero_base_forces_zero_fee() {
        assert_eq!(evaluate_fee(10.0, 0, FeeBasis::Percent), 0);
        assert_eq!(evaluate_fee(5000.0, 0, FeeBasis::Fixed), 0);
    }

    #[test]
    fn test_negative_rule_is_neutral() {
        assert_eq!(evaluate_fee(-10.0, 100_000, FeeBasis::Percent), 0);
        assert_eq!(evaluate_fee(-5000.0, 100_000, FeeBasis::Fixed), 0);
    }

    #[test]
    fn test_non_finite_rule_is_neutral() {
        assert_eq!(evaluate_fee(f64::NAN, 100_000, FeeBasis::Percent), 0);
        assert_eq!(evaluate_fee(f64::INFINITY, 100_000, FeeBasis::Fixed), 0);
    }
}
