//! Calculator session: one card's state and its full evaluation.
//!
//! A [`Calculator`] binds a settings snapshot to the catalog, keeps
//! ticks/points and risk/profit/ratio mutually consistent under edits,
//! and produces an [`Evaluation`] — the complete set of numbers the UI
//! displays. Evaluation is pure and recomputed eagerly on every call;
//! nothing is cached.

use crate::advisor::{advise_fee_savings, FeeSavings};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::exchange::{Exchange, ExchangeKind};
use crate::instrument::Instrument;
use crate::reconcile::{reconcile, RiskRewardField};
use crate::search::{search_candidates, PositionCandidate};
use crate::tier::{select_tier, TierPolicy};
use crate::{Contracts, Money, Ticks};

/// Serializable snapshot of one calculator card.
///
/// This is the shape the UI/storage layer persists (last-used settings
/// and preset bodies). The core never reads or writes storage; it only
/// operates on values handed to it.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CalculatorSettings {
    /// Selected instrument id.
    pub instrument: String,
    /// Selected exchange id.
    pub exchange: String,
    /// Desired stop distance in ticks.
    pub ticks: Ticks,
    /// Desired stop distance in points (`ticks × tick_size`).
    pub points: f64,
    /// Dollars willing to lose.
    pub risk_amount: Money,
    /// Dollar profit target.
    pub profit_amount: Money,
    /// `profit / risk` convention.
    pub risk_reward_ratio: f64,
    /// Fallback per-contract fee when no catalog fee resolves.
    pub custom_fee: Money,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            instrument: "ES".to_string(),
            exchange: "none".to_string(),
            ticks: 0,
            points: 0.0,
            risk_amount: Money::ZERO,
            profit_amount: Money::ZERO,
            risk_reward_ratio: 2.0,
            custom_fee: Money(4_50),
        }
    }
}

/// Per-contract margin totals, shown for direct brokers only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct MarginSummary {
    /// `contracts × margin_per_contract`.
    pub maintenance: Money,
    /// `contracts × day_margin_per_contract`.
    pub day_trading: Money,
}

/// Everything the results panel displays, computed in one pass.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize)]
pub struct Evaluation<'a> {
    /// Feasible positions for the current budget, ascending contracts.
    pub candidates: Vec<PositionCandidate>,
    /// Recommended contract count.
    pub contracts: Contracts,
    /// Recommended stop distance in ticks.
    pub recommended_ticks: Ticks,
    /// Recommended stop distance in points.
    pub recommended_points: f64,
    /// Effective round-turn fee per contract.
    pub fee_per_contract: Money,
    /// Dollar risk at the recommended contract count and the *entered*
    /// tick distance, fees included.
    pub total_risk: Money,
    /// Round-turn fees for the recommended contract count.
    pub total_fees: Money,
    /// Dollar risk for a single contract at the entered tick distance,
    /// fees included.
    pub risk_per_contract: Money,
    /// `profit_amount / total_risk`, 0 when the total risk is 0.
    pub realized_ratio: f64,
    /// Margin totals, for direct brokers with published margins.
    pub margin: Option<MarginSummary>,
    /// Micro→regular fee-savings recommendation, when positive.
    pub fee_savings: Option<FeeSavings<'a>>,
}

/// One calculator card bound to the catalog.
///
/// Instrument and exchange references are resolved at construction, so
/// evaluation itself is infallible.
///
/// ```
/// use tickrisk::{Calculator, CalculatorSettings, Catalog, Money};
///
/// let catalog = Catalog::builtin();
/// let mut calc = Calculator::new(&catalog, CalculatorSettings::default()).unwrap();
///
/// calc.select_exchange("amp").unwrap();
/// calc.set_risk_amount(Money(1000_00));
/// calc.set_ticks(10);
///
/// let eval = calc.evaluate();
/// assert_eq!(eval.contracts, 7);
/// assert_eq!(eval.recommended_ticks, 11);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator<'a> {
    catalog: &'a Catalog,
    instrument: &'a Instrument,
    exchange: &'a Exchange,
    tier_policy: TierPolicy,
    ticks: Ticks,
    points: f64,
    risk_amount: Money,
    profit_amount: Money,
    risk_reward_ratio: f64,
    custom_fee: Money,
}

impl<'a> Calculator<'a> {
    /// Bind a settings snapshot to the catalog, resolving its ids.
    pub fn new(
        catalog: &'a Catalog,
        settings: CalculatorSettings,
    ) -> Result<Self, CatalogError> {
        let instrument = catalog
            .instrument(&settings.instrument)
            .ok_or_else(|| CatalogError::UnknownInstrument(settings.instrument.clone()))?;
        let exchange = catalog
            .exchange(&settings.exchange)
            .ok_or_else(|| CatalogError::UnknownExchange(settings.exchange.clone()))?;
        Ok(Self {
            catalog,
            instrument,
            exchange,
            tier_policy: TierPolicy::default(),
            ticks: settings.ticks,
            points: settings.points,
            risk_amount: settings.risk_amount,
            profit_amount: settings.profit_amount,
            risk_reward_ratio: settings.risk_reward_ratio,
            custom_fee: settings.custom_fee,
        })
    }

    /// Replace the tick-selection policy (default: nearest match).
    pub fn with_tier_policy(mut self, policy: TierPolicy) -> Self {
        self.tier_policy = policy;
        self
    }

    /// The currently selected instrument.
    pub fn instrument(&self) -> &'a Instrument {
        self.instrument
    }

    /// The currently selected exchange.
    pub fn exchange(&self) -> &'a Exchange {
        self.exchange
    }

    /// Materialize the persistable settings snapshot.
    pub fn settings(&self) -> CalculatorSettings {
        CalculatorSettings {
            instrument: self.instrument.id.to_string(),
            exchange: self.exchange.id.to_string(),
            ticks: self.ticks,
            points: self.points,
            risk_amount: self.risk_amount,
            profit_amount: self.profit_amount,
            risk_reward_ratio: self.risk_reward_ratio,
            custom_fee: self.custom_fee,
        }
    }

    /// Switch instruments. The tick distance is kept and the point
    /// distance re-derived from the new tick size.
    pub fn select_instrument(&mut self, id: &str) -> Result<(), CatalogError> {
        self.instrument = self
            .catalog
            .instrument(id)
            .ok_or_else(|| CatalogError::UnknownInstrument(id.to_string()))?;
        self.points = self.ticks as f64 * self.instrument.tick_size;
        Ok(())
    }

    /// Switch exchanges.
    pub fn select_exchange(&mut self, id: &str) -> Result<(), CatalogError> {
        self.exchange = self
            .catalog
            .exchange(id)
            .ok_or_else(|| CatalogError::UnknownExchange(id.to_string()))?;
        Ok(())
    }

    /// Set the stop distance in ticks; points follow.
    pub fn set_ticks(&mut self, ticks: Ticks) {
        self.ticks = ticks;
        self.points = ticks as f64 * self.instrument.tick_size;
    }

    /// Set the stop distance in points; ticks follow, rounded to the
    /// nearest whole tick.
    pub fn set_points(&mut self, points: f64) {
        self.points = points;
        self.ticks = (points / self.instrument.tick_size).round() as Ticks;
    }

    /// Set the risk amount; the profit target follows the ratio.
    pub fn set_risk_amount(&mut self, risk_amount: Money) {
        self.apply(reconcile(
            risk_amount,
            self.profit_amount,
            self.risk_reward_ratio,
            RiskRewardField::Risk,
        ));
    }

    /// Set the profit target; the ratio is re-derived.
    pub fn set_profit_amount(&mut self, profit_amount: Money) {
        self.apply(reconcile(
            self.risk_amount,
            profit_amount,
            self.risk_reward_ratio,
            RiskRewardField::Profit,
        ));
    }

    /// Set the risk/reward ratio; the profit target follows.
    pub fn set_risk_reward_ratio(&mut self, ratio: f64) {
        self.apply(reconcile(
            self.risk_amount,
            self.profit_amount,
            ratio,
            RiskRewardField::Ratio,
        ));
    }

    /// Set the fallback fee used when the exchange publishes none.
    pub fn set_custom_fee(&mut self, fee: Money) {
        self.custom_fee = fee;
    }

    fn apply(&mut self, rr: crate::reconcile::RiskReward) {
        self.risk_amount = rr.risk_amount;
        self.profit_amount = rr.profit_amount;
        self.risk_reward_ratio = rr.risk_reward_ratio;
    }

    /// The effective round-turn fee per contract for the current
    /// instrument/exchange pair.
    pub fn fee_per_contract(&self) -> Money {
        self.exchange
            .schedule
            .resolve(self.instrument.id)
            .unwrap_or(self.custom_fee)
    }

    /// Run the full pipeline: candidate search, tick selection,
    /// risk/fee bookkeeping, margin totals, and the savings advisor.
    pub fn evaluate(&self) -> Evaluation<'a> {
        let fee = self.fee_per_contract();
        let candidates =
            search_candidates(self.risk_amount, self.instrument.tick_value, fee);
        let pick = select_tier(self.ticks, &candidates, self.tier_policy);

        let n = i64::from(pick.contracts);
        let total_risk = n * self.instrument.tick_value.0 * self.ticks + n * fee.0;
        let total_fees = n * fee.0;
        let risk_per_contract = self.instrument.tick_value.0 * self.ticks + fee.0;

        let realized_ratio = if total_risk > 0 {
            self.profit_amount.0 as f64 / total_risk as f64
        } else {
            0.0
        };

        let margin = self.margin_summary(pick.contracts);
        let fee_savings = advise_fee_savings(
            pick.contracts,
            self.instrument,
            fee,
            self.catalog,
            self.exchange.id,
        );

        Evaluation {
            candidates,
            contracts: pick.contracts,
            recommended_ticks: pick.ticks_per_contract,
            recommended_points: pick.ticks_per_contract as f64 * self.instrument.tick_size,
            fee_per_contract: fee,
            total_risk: Money(total_risk),
            total_fees: Money(total_fees),
            risk_per_contract: Money(risk_per_contract),
            realized_ratio,
            margin,
            fee_savings,
        }
    }

    /// Margin totals apply to direct brokers only; prop-firm accounts
    /// trade the firm's capital.
    fn margin_summary(&self, contracts: Contracts) -> Option<MarginSummary> {
        if self.exchange.kind != ExchangeKind::Direct {
            return None;
        }
        let maintenance = self.instrument.margin_per_contract?;
        let day = self.instrument.day_margin_per_contract.unwrap_or(Money::ZERO);
        let n = i64::from(contracts);
        Some(MarginSummary {
            maintenance: Money(n * maintenance.0),
            day_trading: Money(n * day.0),
        })
    }
}
