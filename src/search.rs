//! Optimal contract search: bounded enumeration of feasible positions.
//!
//! For a fixed risk budget there is a trade-off: more contracts means
//! fewer tolerable ticks before fee overhead consumes the budget. The
//! search enumerates every contract count from 1 through
//! [`MAX_CONTRACTS`] and keeps the ones that leave a positive tick
//! allowance.

use crate::{Contracts, Money, Ticks};

/// Fixed upper bound on the contract counts considered. Not
/// configurable.
pub const MAX_CONTRACTS: Contracts = 20;

/// One feasible way to spend the risk budget.
///
/// Ephemeral: recomputed on every evaluation, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct PositionCandidate {
    /// Contract count, in `1..=MAX_CONTRACTS`.
    pub contracts: Contracts,
    /// Tick allowance per contract at this count. Always positive.
    pub ticks_per_contract: Ticks,
    /// Dollar risk actually consumed, fees included. Never exceeds
    /// the risk budget (the tick allowance is floored).
    pub total_risk: Money,
}

/// Enumerate the feasible `(contracts, ticks)` positions for a risk
/// budget.
///
/// For each `contracts` in `1..=MAX_CONTRACTS`:
///
/// ```text
/// ticks_per_contract = floor((risk_amount - contracts × fee) / (contracts × tick_value))
/// ```
///
/// and the candidate is kept only if the allowance is positive.
/// Candidates come back in ascending contract order. A non-positive
/// `risk_amount` or `tick_value` yields an empty list.
///
/// ```
/// use tickrisk::{search_candidates, Money};
///
/// // $1000 budget, $12.50/tick, $4.08 round turn
/// let candidates = search_candidates(Money(1000_00), Money(12_50), Money(4_08));
///
/// assert_eq!(candidates[0].contracts, 1);
/// assert_eq!(candidates[0].ticks_per_contract, 79);
/// assert_eq!(candidates[1].contracts, 2);
/// assert_eq!(candidates[1].ticks_per_contract, 39);
/// ```
pub fn search_candidates(
    risk_amount: Money,
    tick_value: Money,
    fee_per_contract: Money,
) -> Vec<PositionCandidate> {
    if risk_amount.0 <= 0 || tick_value.0 <= 0 {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for contracts in 1..=MAX_CONTRACTS {
        let n = i64::from(contracts);
        let budget = risk_amount.0 - n * fee_per_contract.0;
        let ticks_per_contract = budget.div_euclid(n * tick_value.0);
        if ticks_per_contract > 0 {
            let total_risk =
                n * tick_value.0 * ticks_per_contract + n * fee_per_contract.0;
            candidates.push(PositionCandidate {
                contracts,
                ticks_per_contract,
                total_risk: Money(total_risk),
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_values() {
        // $1000 at $12.50/tick with a $4.08 round turn
        let candidates = search_candidates(Money(1000_00), Money(12_50), Money(4_08));
        assert_eq!(candidates.len(), 20);
        assert_eq!(candidates[0].ticks_per_contract, 79); // floor(995.92 / 12.50)
        assert_eq!(candidates[1].ticks_per_contract, 39); // floor(991.84 / 25.00)
        assert_eq!(candidates[19].contracts, 20);
        assert_eq!(candidates[19].ticks_per_contract, 3);
    }

    #[test]
    fn total_risk_never_exceeds_budget() {
        let risk = Money(1000_00);
        for candidate in search_candidates(risk, Money(12_50), Money(4_08)) {
            assert!(candidate.total_risk <= risk, "{candidate:?}");
        }
    }

    #[test]
    fn zero_risk_is_empty() {
        assert!(search_candidates(Money::ZERO, Money(12_50), Money(4_08)).is_empty());
    }

    #[test]
    fn zero_tick_value_is_empty() {
        assert!(search_candidates(Money(1000_00), Money::ZERO, Money(4_08)).is_empty());
    }

    #[test]
    fn fees_too_large_is_empty() {
        // Fee alone eats the whole budget at every contract count
        assert!(search_candidates(Money(10_00), Money(12_50), Money(20_00)).is_empty());
    }

    #[test]
    fn high_counts_drop_out_when_fees_dominate() {
        // $100 budget, $12.50/tick, $4.08 fee: 2 contracts leave
        // floor((100 - 8.16) / 25) = 3 ticks, 8 contracts leave none.
        let candidates = search_candidates(Money(100_00), Money(12_50), Money(4_08));
        assert!(!candidates.is_empty());
        let max = candidates.last().unwrap().contracts;
        assert!(max < MAX_CONTRACTS, "expected fee-capped count, got {max}");
        // Ascending contract order
        for pair in candidates.windows(2) {
            assert!(pair[0].contracts < pair[1].contracts);
        }
    }

    #[test]
    fn zero_fee_allowance() {
        let candidates = search_candidates(Money(100_00), Money(12_50), Money::ZERO);
        assert_eq!(candidates[0].ticks_per_contract, 8); // floor(100 / 12.50)
        assert_eq!(candidates[0].total_risk, Money(100_00));
    }
}
