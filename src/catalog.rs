//! Immutable instrument/exchange catalog with fee resolution.
//!
//! Built once at startup from the builtin reference tables; there is
//! no write path. All downstream math asks this catalog for contract
//! specs and effective round-turn fees.

use rustc_hash::FxHashMap;

use crate::exchange::{EXCHANGE_GROUPS, Exchange};
use crate::instrument::{BUILTIN_INSTRUMENTS, Instrument};
use crate::Money;

/// Static reference data indexed for lookup by id.
///
/// ```
/// use tickrisk::{Catalog, Money};
///
/// let catalog = Catalog::builtin();
///
/// let es = catalog.instrument("ES").unwrap();
/// assert_eq!(es.tick_value, Money(12_50));
///
/// // AMP bills a flat $4.08 round turn on everything
/// assert_eq!(catalog.resolve_fee("amp", "ES"), Some(Money(4_08)));
///
/// // The custom-fee broker publishes nothing; callers fall back
/// assert_eq!(catalog.resolve_fee("none", "ES"), None);
/// assert_eq!(catalog.effective_fee("none", "ES", Money(4_50)), Money(4_50));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    instruments: FxHashMap<&'static str, Instrument>,
    exchanges: FxHashMap<&'static str, Exchange>,
}

impl Catalog {
    /// Build the catalog from the builtin reference tables.
    pub fn builtin() -> Self {
        let instruments = BUILTIN_INSTRUMENTS
            .iter()
            .map(|inst| (inst.id, *inst))
            .collect();
        let exchanges = EXCHANGE_GROUPS
            .iter()
            .flat_map(|group| group.exchanges.iter())
            .map(|ex| (ex.id, *ex))
            .collect();
        Self {
            instruments,
            exchanges,
        }
    }

    /// Look up an instrument by id.
    pub fn instrument(&self, id: &str) -> Option<&Instrument> {
        self.instruments.get(id)
    }

    /// Look up an exchange by id.
    pub fn exchange(&self, id: &str) -> Option<&Exchange> {
        self.exchanges.get(id)
    }

    /// Iterator over all instruments (unordered).
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }

    /// Iterator over all exchanges (unordered).
    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.values()
    }

    /// Resolve the round-turn fee for `(exchange, instrument)`.
    ///
    /// `None` means no fee is published for that pair — unknown
    /// exchange, per-instrument table miss, or a custom-fee schedule —
    /// and the caller must fall back to a user-supplied fee. A no-fees
    /// exchange resolves to exactly `Money::ZERO`.
    pub fn resolve_fee(&self, exchange_id: &str, instrument_id: &str) -> Option<Money> {
        self.exchange(exchange_id)?.schedule.resolve(instrument_id)
    }

    /// The fee-per-contract used everywhere downstream:
    /// `resolve_fee(..) ?? custom_fee`.
    pub fn effective_fee(
        &self,
        exchange_id: &str,
        instrument_id: &str,
        custom_fee: Money,
    ) -> Money {
        self.resolve_fee(exchange_id, instrument_id)
            .unwrap_or(custom_fee)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
