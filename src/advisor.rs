//! Fee-savings advisor: micro versus regular contract sizing.
//!
//! Ten micro contracts carry the same exposure as one regular contract
//! but usually not the same fees. When a recommended micro position is
//! large enough to be expressed in regular contracts more cheaply, the
//! advisor says so.

use crate::catalog::Catalog;
use crate::instrument::Instrument;
use crate::{Contracts, Money};

/// Micro contracts per regular contract (the standard CME sizing
/// ratio). Fixed.
pub const MICRO_PER_REGULAR: Contracts = 10;

/// A cheaper regular-size equivalent for a micro position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct FeeSavings<'a> {
    /// The regular-size sibling contract to trade instead.
    pub regular_instrument: &'a Instrument,
    /// How many regular contracts replace the micro position.
    pub regular_contracts: Contracts,
    /// Round-turn fee reduction. Always positive.
    pub savings: Money,
}

/// Compare a micro position against its regular-size equivalent.
///
/// Returns a recommendation only when all of the following hold:
/// the instrument declares a `regular_version`, the position converts
/// to at least one whole regular contract, and the fee reduction is
/// strictly positive. When the regular instrument has no resolvable
/// fee on this exchange, the micro fee stands in for it (a deliberate
/// simplification, not a lookup failure).
pub fn advise_fee_savings<'a>(
    contracts: Contracts,
    instrument: &Instrument,
    fee_per_contract: Money,
    catalog: &'a Catalog,
    exchange_id: &str,
) -> Option<FeeSavings<'a>> {
    let regular = catalog.instrument(instrument.regular_version?)?;

    let regular_contracts = contracts / MICRO_PER_REGULAR;
    if regular_contracts < 1 {
        return None;
    }

    let regular_fee = catalog
        .resolve_fee(exchange_id, regular.id)
        .unwrap_or(fee_per_contract);

    let current_fees = i64::from(contracts) * fee_per_contract.0;
    let regular_fees = i64::from(regular_contracts) * regular_fee.0;
    let savings = current_fees - regular_fees;
    if savings <= 0 {
        return None;
    }

    Some(FeeSavings {
        regular_instrument: regular,
        regular_contracts,
        savings: Money(savings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn no_regular_version_means_no_advice() {
        let cat = catalog();
        let es = cat.instrument("ES").unwrap();
        assert!(advise_fee_savings(20, es, Money(2_80), &cat, "topstep_x").is_none());
    }

    #[test]
    fn under_ten_micros_means_no_advice() {
        let cat = catalog();
        let mes = cat.instrument("MES").unwrap();
        assert!(advise_fee_savings(9, mes, Money(0_74), &cat, "topstep_x").is_none());
    }

    #[test]
    fn ten_micros_convert_to_one_regular() {
        let cat = catalog();
        let mes = cat.instrument("MES").unwrap();
        // 10 × $0.74 = $7.40 vs 1 × $2.80 = $2.80 → saves $4.60
        let advice = advise_fee_savings(10, mes, Money(0_74), &cat, "topstep_x")
            .expect("savings expected");
        assert_eq!(advice.regular_instrument.id, "ES");
        assert_eq!(advice.regular_contracts, 1);
        assert_eq!(advice.savings, Money(4_60));
    }

    #[test]
    fn fifteen_micros_still_convert_to_one_regular() {
        let cat = catalog();
        let mes = cat.instrument("MES").unwrap();
        // 15 × $0.74 = $11.10 vs 1 × $2.80 → saves $8.30
        let advice = advise_fee_savings(15, mes, Money(0_74), &cat, "topstep_x")
            .expect("savings expected");
        assert_eq!(advice.regular_contracts, 1);
        assert_eq!(advice.savings, Money(8_30));
    }

    #[test]
    fn regular_fee_falls_back_to_micro_fee() {
        let cat = catalog();
        let mes = cat.instrument("MES").unwrap();
        // The custom-fee broker resolves nothing; the micro fee stands
        // in: 10 × $4.50 vs 1 × $4.50 → saves $40.50
        let advice = advise_fee_savings(10, mes, Money(4_50), &cat, "none")
            .expect("savings expected");
        assert_eq!(advice.savings, Money(40_50));
    }

    #[test]
    fn zero_fees_mean_no_savings() {
        let cat = catalog();
        let mes = cat.instrument("MES").unwrap();
        // No-fees exchange: both sides cost nothing, savings is not > 0
        assert!(
            advise_fee_savings(20, mes, Money::ZERO, &cat, "topstep_x_no_fees").is_none()
        );
    }
}
