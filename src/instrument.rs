//! Futures instrument reference data.
//!
//! Instruments are static, immutable reference data: contract
//! specifications for the CME products the calculator understands,
//! including the micro/regular cross-references the fee-savings
//! advisor relies on.

use crate::Money;

/// Contract specification for one futures instrument.
///
/// `tick_value` is the dollar worth of one tick movement for one
/// contract; `tick_size` is the minimum price increment in points.
/// Margin fields are informational only and never enter the sizing
/// math.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct Instrument {
    /// Exchange symbol, e.g. `"ES"`.
    pub id: &'static str,
    /// Human-readable contract name.
    pub name: &'static str,
    /// Dollar value of one tick for one contract. Always positive.
    pub tick_value: Money,
    /// Minimum price increment in points. Always positive.
    pub tick_size: f64,
    /// Grouping label for presentation (no computational meaning).
    pub category: &'static str,
    /// Symbol of the micro-sized sibling contract, if one is listed.
    pub micro_version: Option<&'static str>,
    /// Symbol of the regular-sized sibling contract, if this is a micro.
    pub regular_version: Option<&'static str>,
    /// Maintenance margin per contract, where published.
    pub margin_per_contract: Option<Money>,
    /// Day-trading margin per contract, where published.
    pub day_margin_per_contract: Option<Money>,
}

impl Instrument {
    /// Dollar value of one full point of movement for one contract.
    pub fn point_value(&self) -> f64 {
        self.tick_value.0 as f64 / 100.0 / self.tick_size
    }
}

const fn spec(
    id: &'static str,
    name: &'static str,
    tick_value: Money,
    tick_size: f64,
    category: &'static str,
) -> Instrument {
    Instrument {
        id,
        name,
        tick_value,
        tick_size,
        category,
        micro_version: None,
        regular_version: None,
        margin_per_contract: None,
        day_margin_per_contract: None,
    }
}

/// Builtin CME instrument table.
///
/// Only instruments whose tick value is a whole number of cents are
/// listed; `Money` cannot express fractional-cent ticks.
pub static BUILTIN_INSTRUMENTS: &[Instrument] = &[
    // CME equity index futures
    Instrument {
        micro_version: Some("MES"),
        margin_per_contract: Some(Money(12_650_00)),
        day_margin_per_contract: Some(Money(500_00)),
        ..spec("ES", "E-mini S&P 500", Money(12_50), 0.25, "Indices")
    },
    Instrument {
        regular_version: Some("ES"),
        margin_per_contract: Some(Money(1_265_00)),
        day_margin_per_contract: Some(Money(50_00)),
        ..spec("MES", "Micro E-mini S&P 500", Money(1_25), 0.25, "Indices")
    },
    Instrument {
        micro_version: Some("MNQ"),
        ..spec("NQ", "E-mini Nasdaq-100", Money(5_00), 0.25, "Indices")
    },
    Instrument {
        regular_version: Some("NQ"),
        ..spec("MNQ", "Micro E-mini Nasdaq-100", Money(0_50), 0.25, "Indices")
    },
    Instrument {
        micro_version: Some("M2K"),
        ..spec("RTY", "E-mini Russell 2000", Money(5_00), 0.10, "Indices")
    },
    Instrument {
        regular_version: Some("RTY"),
        ..spec("M2K", "Micro E-mini Russell 2000", Money(0_50), 0.10, "Indices")
    },
    Instrument {
        micro_version: Some("MYM"),
        ..spec("YM", "E-mini Dow", Money(5_00), 1.0, "Indices")
    },
    Instrument {
        regular_version: Some("YM"),
        ..spec("MYM", "Micro E-mini Dow", Money(0_50), 1.0, "Indices")
    },
    spec("NKD", "Nikkei 225 (USD)", Money(25_00), 5.0, "Indices"),
    // NYMEX energy futures
    Instrument {
        micro_version: Some("MCL"),
        ..spec("CL", "Crude Oil", Money(10_00), 0.01, "Energy")
    },
    Instrument {
        regular_version: Some("CL"),
        ..spec("MCL", "Micro Crude Oil", Money(1_00), 0.01, "Energy")
    },
    spec("QM", "E-mini Crude Oil", Money(12_50), 0.025, "Energy"),
    Instrument {
        micro_version: Some("MNG"),
        ..spec("NG", "Natural Gas", Money(10_00), 0.001, "Energy")
    },
    Instrument {
        regular_version: Some("NG"),
        ..spec("MNG", "Micro Natural Gas", Money(2_50), 0.001, "Energy")
    },
    spec("QG", "E-mini Natural Gas", Money(12_50), 0.005, "Energy"),
    spec("RB", "RBOB Gasoline", Money(4_20), 0.0001, "Energy"),
    spec("HO", "NY Harbor ULSD", Money(4_20), 0.0001, "Energy"),
    // COMEX metal futures
    Instrument {
        micro_version: Some("MGC"),
        ..spec("GC", "Gold", Money(10_00), 0.10, "Metals")
    },
    Instrument {
        regular_version: Some("GC"),
        ..spec("MGC", "Micro Gold", Money(1_00), 0.10, "Metals")
    },
    Instrument {
        micro_version: Some("SIL"),
        ..spec("SI", "Silver", Money(25_00), 0.005, "Metals")
    },
    Instrument {
        regular_version: Some("SI"),
        ..spec("SIL", "Micro Silver", Money(5_00), 0.005, "Metals")
    },
    Instrument {
        micro_version: Some("MHG"),
        ..spec("HG", "Copper", Money(12_50), 0.0005, "Metals")
    },
    Instrument {
        regular_version: Some("HG"),
        ..spec("MHG", "Micro Copper", Money(1_25), 0.0005, "Metals")
    },
    spec("PL", "Platinum", Money(5_00), 0.10, "Metals"),
    // CME FX futures
    Instrument {
        micro_version: Some("M6E"),
        ..spec("6E", "Euro FX", Money(6_25), 0.00005, "Currencies")
    },
    Instrument {
        regular_version: Some("6E"),
        ..spec("M6E", "Micro Euro FX", Money(1_25), 0.0001, "Currencies")
    },
    Instrument {
        micro_version: Some("M6A"),
        ..spec("6A", "Australian Dollar", Money(10_00), 0.0001, "Currencies")
    },
    Instrument {
        regular_version: Some("6A"),
        ..spec("M6A", "Micro AUD/USD", Money(1_00), 0.0001, "Currencies")
    },
    spec("6B", "British Pound", Money(6_25), 0.0001, "Currencies"),
    spec("6C", "Canadian Dollar", Money(5_00), 0.00005, "Currencies"),
    spec("6J", "Japanese Yen", Money(6_25), 0.0000005, "Currencies"),
    // CBOT interest rate futures
    spec("ZB", "30-Year T-Bond", Money(31_25), 0.03125, "Rates"),
    spec("UB", "Ultra T-Bond", Money(31_25), 0.03125, "Rates"),
    // Crypto
    spec("MBT", "Micro Bitcoin", Money(0_50), 5.0, "Crypto"),
    // CBOT agricultural futures
    spec("ZC", "Corn", Money(12_50), 0.25, "Agriculture"),
    spec("ZW", "Wheat", Money(12_50), 0.25, "Agriculture"),
    spec("ZS", "Soybeans", Money(12_50), 0.25, "Agriculture"),
    spec("ZM", "Soybean Meal", Money(10_00), 0.10, "Agriculture"),
    spec("ZL", "Soybean Oil", Money(6_00), 0.01, "Agriculture"),
    spec("HE", "Lean Hogs", Money(10_00), 0.025, "Agriculture"),
    spec("LE", "Live Cattle", Money(10_00), 0.025, "Agriculture"),
];
