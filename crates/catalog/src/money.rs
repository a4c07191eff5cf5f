//! Monetary amounts in minor currency units.

use serde::{Deserialize, Serialize};

use stockpilot_core::ValueObject;

/// An amount of money in the smallest currency unit (e.g. cents).
///
/// Integer minor units keep reorder-cost arithmetic exact. Currency selection
/// and localized formatting belong to the embedding application; `Display`
/// renders a plain `units.hundredths` form for advisory text.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }

    /// Multiply by a unit count (e.g. a suggested reorder quantity).
    ///
    /// Saturates on overflow; catalog prices and quantities stay far below
    /// that range in practice.
    pub fn times(&self, quantity: u64) -> Money {
        Money(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc.saturating_add(m))
    }
}

impl ValueObject for Money {}
