//! Core types: Money, Ticks, Contracts

use std::fmt;

/// A dollar amount in integer cents.
///
/// `Money(12_50)` represents $12.50. Fees, tick values, risk budgets,
/// margins, and savings are all stored this way; fixed-point avoids
/// floating-point errors in financial calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.0 / 100;
        let cents = (self.0 % 100).abs();
        if self.0 < 0 {
            write!(f, "-${}.{:02}", dollars.abs(), cents)
        } else {
            write!(f, "${}.{:02}", dollars, cents)
        }
    }
}

/// Stop distance measured in ticks. Signed so that differences never
/// wrap; meaningful values are positive.
pub type Ticks = i64;

/// Number of contracts in a position. Always positive.
pub type Contracts = u32;
