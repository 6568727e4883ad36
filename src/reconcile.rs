//! Risk/reward reconciliation.
//!
//! Exactly one of {risk, profit, ratio} drives each user edit; the
//! dependent leg is recomputed so the three stay mutually consistent.
//! The convention is fixed throughout the crate:
//!
//! ```text
//! risk_reward_ratio = profit_amount / risk_amount
//! ```
//!
//! so a ratio of 2 means the profit target is twice the risk.

use crate::Money;

/// Which field the user touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRewardField {
    Risk,
    Profit,
    Ratio,
}

/// The mutually consistent risk/profit/ratio triple.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiskReward {
    pub risk_amount: Money,
    pub profit_amount: Money,
    pub risk_reward_ratio: f64,
}

/// `profit / risk`, defined as 0 when the risk amount is not positive.
pub fn ratio_of(profit_amount: Money, risk_amount: Money) -> f64 {
    if risk_amount.0 <= 0 {
        0.0
    } else {
        profit_amount.0 as f64 / risk_amount.0 as f64
    }
}

/// Reconcile the triple after a single-field edit.
///
/// The inputs already carry the edited value; `edited` tags which one
/// drives. A `risk` or `ratio` edit recomputes the profit target; a
/// `profit` edit recomputes the ratio. The untouched leg is returned
/// unchanged. Division by a zero risk amount never raises: the ratio
/// is defined as 0 instead.
///
/// ```
/// use tickrisk::{reconcile, Money, RiskRewardField};
///
/// let rr = reconcile(Money(1000_00), Money::ZERO, 2.0, RiskRewardField::Ratio);
/// assert_eq!(rr.profit_amount, Money(2000_00));
///
/// let rr = reconcile(rr.risk_amount, rr.profit_amount, rr.risk_reward_ratio,
///                    RiskRewardField::Profit);
/// assert_eq!(rr.risk_reward_ratio, 2.0);
/// ```
pub fn reconcile(
    risk_amount: Money,
    profit_amount: Money,
    risk_reward_ratio: f64,
    edited: RiskRewardField,
) -> RiskReward {
    match edited {
        RiskRewardField::Risk | RiskRewardField::Ratio => RiskReward {
            risk_amount,
            profit_amount: scale(risk_amount, risk_reward_ratio),
            risk_reward_ratio,
        },
        RiskRewardField::Profit => RiskReward {
            risk_amount,
            profit_amount,
            risk_reward_ratio: ratio_of(profit_amount, risk_amount),
        },
    }
}

/// `amount × factor`, rounded to the nearest cent.
fn scale(amount: Money, factor: f64) -> Money {
    Money((amount.0 as f64 * factor).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_edit_recomputes_profit() {
        let rr = reconcile(Money(500_00), Money(123_00), 2.0, RiskRewardField::Risk);
        assert_eq!(rr.risk_amount, Money(500_00));
        assert_eq!(rr.profit_amount, Money(1000_00));
        assert_eq!(rr.risk_reward_ratio, 2.0);
    }

    #[test]
    fn profit_edit_recomputes_ratio() {
        let rr = reconcile(Money(1000_00), Money(1500_00), 2.0, RiskRewardField::Profit);
        assert_eq!(rr.risk_amount, Money(1000_00));
        assert_eq!(rr.profit_amount, Money(1500_00));
        assert_eq!(rr.risk_reward_ratio, 1.5);
    }

    #[test]
    fn ratio_edit_recomputes_profit() {
        let rr = reconcile(Money(1000_00), Money(999_00), 0.5, RiskRewardField::Ratio);
        assert_eq!(rr.profit_amount, Money(500_00));
        assert_eq!(rr.risk_reward_ratio, 0.5);
    }

    #[test]
    fn round_trip_reproduces_ratio() {
        // ratio edit then re-deriving the ratio from the pair gives it back
        let rr = reconcile(Money(1000_00), Money::ZERO, 2.0, RiskRewardField::Ratio);
        assert_eq!(rr.profit_amount, Money(2000_00));
        assert_eq!(ratio_of(rr.profit_amount, rr.risk_amount), 2.0);
    }

    #[test]
    fn zero_risk_ratio_is_zero() {
        let rr = reconcile(Money::ZERO, Money(500_00), 2.0, RiskRewardField::Profit);
        assert_eq!(rr.risk_reward_ratio, 0.0);
    }

    #[test]
    fn profit_rounds_to_nearest_cent() {
        let rr = reconcile(Money(10_01), Money::ZERO, 0.5, RiskRewardField::Ratio);
        assert_eq!(rr.profit_amount, Money(5_01)); // 500.5 rounds up
    }
}
