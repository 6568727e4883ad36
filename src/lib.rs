// Allow our dollar.cents digit grouping convention (e.g., 12_50 = $12.50)
#![allow(clippy::inconsistent_digit_grouping)]

//! # tickrisk
//!
//! A deterministic position-sizing and risk/reward calculator for
//! futures trading.
//!
//! Given an instrument, an exchange fee schedule, and a dollar risk
//! budget, tickrisk recommends a contract count and tick stop distance
//! and reports total risk, fees, and risk/reward — the computational
//! core behind a futures risk calculator, with all UI and storage left
//! to the caller.
//!
//! ## Features
//!
//! - **Instrument/fee catalog**: immutable CME reference data and
//!   broker/prop-firm fee schedules, resolved structurally
//! - **Optimal contract search**: bounded enumeration of feasible
//!   `(contracts, ticks)` positions for a risk budget
//! - **Tier matching**: nearest, banded, or ceiling snapping of the
//!   user's stop distance onto a candidate — always deterministic
//! - **Risk/reward reconciliation**: single-field edits keep risk,
//!   profit, and ratio mutually consistent
//! - **Fee-savings advisor**: flags when a micro position is cheaper
//!   as regular-size contracts
//! - **Fixed-point money**: integer cents everywhere, no float drift
//!
//! ## Quick Start
//!
//! ```
//! use tickrisk::{Calculator, CalculatorSettings, Catalog, Money};
//!
//! let catalog = Catalog::builtin();
//!
//! let mut calc = Calculator::new(&catalog, CalculatorSettings::default()).unwrap();
//! calc.select_exchange("amp").unwrap();     // flat $4.08 round turn
//! calc.set_risk_amount(Money(1000_00));     // willing to lose $1000
//! calc.set_ticks(10);                       // prefer a ~10 tick stop
//!
//! let eval = calc.evaluate();
//! assert_eq!(eval.contracts, 7);            // 7 ES contracts
//! assert_eq!(eval.recommended_ticks, 11);   // at an 11 tick stop
//! assert_eq!(eval.total_fees, Money(28_56));
//! ```
//!
//! ## The search, standalone
//!
//! The core enumeration is a pure function over the budget:
//!
//! ```
//! use tickrisk::{search_candidates, select_tier, Money, TierPolicy};
//!
//! let candidates = search_candidates(Money(1000_00), Money(12_50), Money(4_08));
//! assert_eq!(candidates[0].ticks_per_contract, 79);   // 1 contract
//! assert_eq!(candidates[1].ticks_per_contract, 39);   // 2 contracts
//!
//! let pick = select_tier(10, &candidates, TierPolicy::Nearest);
//! assert_eq!((pick.contracts, pick.ticks_per_contract), (7, 11));
//! ```
//!
//! ## Fee resolution
//!
//! Fees resolve per `(exchange, instrument)`: flat broker fees,
//! per-instrument prop-firm tables, exactly zero for no-fee account
//! types, and a caller-supplied custom fee when nothing is published:
//!
//! ```
//! use tickrisk::{Catalog, Money};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.effective_fee("topstep_x", "MES", Money(9_99)), Money(0_74));
//! assert_eq!(catalog.effective_fee("topstep_x_no_fees", "MES", Money(9_99)), Money::ZERO);
//! assert_eq!(catalog.effective_fee("none", "MES", Money(9_99)), Money(9_99));
//! ```

mod advisor;
mod catalog;
mod error;
mod exchange;
mod instrument;
mod preset;
mod reconcile;
mod search;
mod session;
mod tier;
mod types;

// Re-export public API
pub use advisor::{advise_fee_savings, FeeSavings, MICRO_PER_REGULAR};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use exchange::{Exchange, ExchangeGroup, ExchangeKind, FeeSchedule, EXCHANGE_GROUPS};
pub use instrument::{Instrument, BUILTIN_INSTRUMENTS};
pub use preset::{Preset, PresetBook, PresetScope};
pub use reconcile::{ratio_of, reconcile, RiskReward, RiskRewardField};
pub use search::{search_candidates, PositionCandidate, MAX_CONTRACTS};
pub use session::{Calculator, CalculatorSettings, Evaluation, MarginSummary};
pub use tier::{select_tier, TierPolicy, TierSelection, DEFAULT_BAND_THRESHOLD};
pub use types::{Contracts, Money, Ticks};
