//! Exchanges, brokers, and their round-turn fee schedules.
//!
//! An [`Exchange`] is either a direct retail broker billing one flat
//! round-turn fee per contract, or a prop firm whose schedule may be
//! instrument-specific or zero. The schedule is modeled structurally
//! as [`FeeSchedule`] so the "no fees" and "per-instrument" invariants
//! hold by construction rather than by string matching on ids.

use crate::Money;

/// Direct retail broker or proprietary-trading funding provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeKind {
    /// Retail broker: one flat round-turn fee regardless of instrument.
    Direct,
    /// Funded-account provider: instrument-specific or zero fees.
    Prop,
}

/// How an exchange bills round-turn fees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeeSchedule {
    /// Single flat round-turn fee per contract for every instrument.
    Flat(Money),
    /// Instrument-specific round-turn fees, `(instrument id, fee)`.
    /// Instruments absent from the table have no resolvable fee.
    PerInstrument(&'static [(&'static str, Money)]),
    /// No fees at all: every instrument resolves to exactly zero.
    Free,
    /// No published schedule; the caller's custom fee applies.
    Custom,
}

impl FeeSchedule {
    /// Resolve the round-turn fee for one instrument.
    ///
    /// `None` means "no fee available here" and the caller must fall
    /// back to their custom fee. [`FeeSchedule::Free`] resolves to
    /// exactly zero, never to the custom fee.
    pub fn resolve(&self, instrument_id: &str) -> Option<Money> {
        match self {
            FeeSchedule::Flat(fee) => Some(*fee),
            FeeSchedule::PerInstrument(table) => table
                .iter()
                .find(|(id, _)| *id == instrument_id)
                .map(|(_, fee)| *fee),
            FeeSchedule::Free => Some(Money::ZERO),
            FeeSchedule::Custom => None,
        }
    }
}

/// One broker or prop-firm account type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exchange {
    /// Stable identifier, e.g. `"topstep_x"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Direct broker or prop firm.
    pub kind: ExchangeKind,
    /// Round-turn fee schedule.
    pub schedule: FeeSchedule,
    /// Instruments this account type can trade (`None` = unrestricted).
    pub available_instruments: Option<&'static [&'static str]>,
}

impl Exchange {
    /// True if this exchange can trade the given instrument.
    pub fn supports(&self, instrument_id: &str) -> bool {
        match self.available_instruments {
            Some(ids) => ids.contains(&instrument_id),
            None => true,
        }
    }
}

/// Presentation grouping of exchanges. Carries no computational meaning.
#[derive(Clone, Copy, Debug)]
pub struct ExchangeGroup {
    pub name: &'static str,
    pub kind: ExchangeKind,
    pub exchanges: &'static [Exchange],
}

/// TopstepX per-instrument round-turn fees.
static TOPSTEP_X_FEES: &[(&str, Money)] = &[
    // Equity index
    ("ES", Money(2_80)),
    ("MES", Money(0_74)),
    ("NQ", Money(2_80)),
    ("MNQ", Money(0_74)),
    ("RTY", Money(2_80)),
    ("M2K", Money(0_74)),
    ("YM", Money(2_80)),
    ("MYM", Money(0_74)),
    ("NKD", Money(4_34)),
    ("MBT", Money(2_04)),
    // Energy
    ("CL", Money(3_04)),
    ("MCL", Money(1_04)),
    ("QM", Money(2_44)),
    ("QG", Money(1_04)),
    ("PL", Money(3_24)),
    ("RB", Money(3_04)),
    ("HO", Money(3_04)),
    ("NG", Money(3_20)),
    ("MNG", Money(1_24)),
    // FX
    ("6A", Money(3_24)),
    ("M6A", Money(0_52)),
    ("6B", Money(3_24)),
    ("6C", Money(3_24)),
    ("6E", Money(3_24)),
    ("M6E", Money(0_52)),
    ("6J", Money(3_24)),
    // Rates
    ("ZB", Money(1_78)),
    ("UB", Money(1_94)),
    // Metals
    ("GC", Money(3_24)),
    ("MGC", Money(1_04)),
    ("SI", Money(3_24)),
    ("SIL", Money(2_04)),
    ("HG", Money(3_24)),
    ("MHG", Money(1_24)),
    // Agriculture
    ("HE", Money(4_24)),
    ("LE", Money(4_24)),
    ("ZC", Money(4_24)),
    ("ZW", Money(4_24)),
    ("ZS", Money(4_24)),
    ("ZM", Money(4_24)),
    ("ZL", Money(4_24)),
];

/// Topstep (Tradovate) per-instrument round-turn fees.
static TOPSTEP_TRADOVATE_FEES: &[(&str, Money)] = &[
    ("ES", Money(4_28)),
    ("MES", Money(1_34)),
    ("NQ", Money(4_28)),
    ("MNQ", Money(1_34)),
    ("RTY", Money(4_28)),
    ("M2K", Money(1_34)),
    ("YM", Money(4_28)),
    ("MYM", Money(1_34)),
];

/// Topstep (Rithmic) per-instrument round-turn fees.
static TOPSTEP_RITHMIC_FEES: &[(&str, Money)] = &[
    ("ES", Money(4_36)),
    ("MES", Money(1_42)),
    ("NQ", Money(4_36)),
    ("MNQ", Money(1_42)),
    ("RTY", Money(4_36)),
    ("M2K", Money(1_42)),
    ("YM", Money(4_36)),
    ("MYM", Money(1_42)),
];

/// Topstep (T4) per-instrument round-turn fees. T4 lists regular-size
/// contracts only.
static TOPSTEP_T4_FEES: &[(&str, Money)] = &[
    ("ES", Money(4_80)),
    ("NQ", Money(4_80)),
    ("RTY", Money(4_80)),
    ("YM", Money(4_80)),
    ("NKD", Money(5_34)),
    ("6A", Money(5_24)),
    ("6B", Money(5_24)),
    ("6C", Money(5_24)),
    ("6E", Money(5_24)),
    ("6J", Money(5_24)),
    ("CL", Money(5_04)),
    ("QM", Money(4_44)),
    ("NG", Money(5_24)),
    ("QG", Money(3_04)),
    ("PL", Money(5_24)),
    ("RB", Money(5_04)),
    ("ZC", Money(6_24)),
    ("ZW", Money(6_24)),
    ("ZS", Money(6_24)),
    ("ZM", Money(6_24)),
    ("ZL", Money(6_24)),
    ("ZB", Money(3_78)),
    ("UB", Money(3_94)),
    ("GC", Money(5_24)),
    ("SI", Money(5_24)),
    ("HG", Money(5_24)),
    ("LE", Money(6_24)),
    ("HE", Money(6_24)),
];

/// Instruments tradable on Topstep accounts.
static TOPSTEP_INSTRUMENTS: &[&str] = &[
    "ES", "MES", "NQ", "MNQ", "RTY", "M2K", "YM", "MYM", "NKD", "MBT", "CL",
    "MCL", "QM", "PL", "QG", "RB", "HO", "NG", "MNG", "6A", "M6A", "6B", "6C",
    "6E", "M6E", "6J", "ZB", "UB", "GC", "MGC", "SI", "SIL", "HG", "MHG",
    "HE", "LE", "ZC", "ZW", "ZS", "ZM", "ZL",
];

static DIRECT_BROKERS: &[Exchange] = &[
    Exchange {
        id: "none",
        name: "Custom Fee",
        kind: ExchangeKind::Direct,
        schedule: FeeSchedule::Custom,
        available_instruments: None,
    },
    Exchange {
        id: "amp",
        name: "AMP",
        kind: ExchangeKind::Direct,
        schedule: FeeSchedule::Flat(Money(4_08)),
        available_instruments: None,
    },
    Exchange {
        id: "ninjatrader",
        name: "NinjaTrader",
        kind: ExchangeKind::Direct,
        schedule: FeeSchedule::Flat(Money(3_58)),
        available_instruments: None,
    },
    Exchange {
        id: "tradovate",
        name: "Tradovate",
        kind: ExchangeKind::Direct,
        schedule: FeeSchedule::Flat(Money(4_50)),
        available_instruments: None,
    },
    Exchange {
        id: "optimus",
        name: "Optimus",
        kind: ExchangeKind::Direct,
        schedule: FeeSchedule::Flat(Money(3_44)),
        available_instruments: None,
    },
];

static PROP_FIRMS: &[Exchange] = &[
    Exchange {
        id: "topstep_x",
        name: "TopstepX",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::PerInstrument(TOPSTEP_X_FEES),
        available_instruments: Some(TOPSTEP_INSTRUMENTS),
    },
    Exchange {
        id: "topstep_x_no_fees",
        name: "TopstepX (No Fees)",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::Free,
        available_instruments: Some(TOPSTEP_INSTRUMENTS),
    },
    Exchange {
        id: "topstep_tradovate",
        name: "Topstep (Tradovate)",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::PerInstrument(TOPSTEP_TRADOVATE_FEES),
        available_instruments: Some(TOPSTEP_INSTRUMENTS),
    },
    Exchange {
        id: "topstep_rithmic",
        name: "Topstep (Rithmic)",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::PerInstrument(TOPSTEP_RITHMIC_FEES),
        available_instruments: Some(TOPSTEP_INSTRUMENTS),
    },
    Exchange {
        id: "topstep_t4",
        name: "Topstep (T4)",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::PerInstrument(TOPSTEP_T4_FEES),
        available_instruments: Some(TOPSTEP_INSTRUMENTS),
    },
    Exchange {
        id: "my_funded_futures",
        name: "My Funded Futures",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::Custom,
        available_instruments: None,
    },
    Exchange {
        id: "alpha_capital",
        name: "Alpha Capital Group",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::Custom,
        available_instruments: None,
    },
    Exchange {
        id: "trade_day",
        name: "Trade Day",
        kind: ExchangeKind::Prop,
        schedule: FeeSchedule::Custom,
        available_instruments: None,
    },
];

/// Builtin exchange groups in display order.
pub static EXCHANGE_GROUPS: &[ExchangeGroup] = &[
    ExchangeGroup {
        name: "Direct Brokers",
        kind: ExchangeKind::Direct,
        exchanges: DIRECT_BROKERS,
    },
    ExchangeGroup {
        name: "Prop Firms",
        kind: ExchangeKind::Prop,
        exchanges: PROP_FIRMS,
    },
];
