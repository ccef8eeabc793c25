//! Money amounts and the tax rate.
//!
//! Amounts are held as integer cents so that cart arithmetic is exact.
//! On the wire the API speaks plain JSON numbers in currency units
//! (`12.99`), so `Money` serializes to / from `f64` and rounds to the
//! nearest cent on the way in.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A non-negative amount of money in cents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a currency-unit amount (e.g. `12.99`) to cents.
    ///
    /// Returns `None` for negative, NaN or infinite input.
    pub fn from_units(units: f64) -> Option<Self> {
        if !units.is_finite() || units < 0.0 {
            return None;
        }
        let cents = (units * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Money(cents as u64))
    }

    /// Amount in currency units, for the JSON wire format.
    pub fn as_units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self × quantity`.
    pub fn times(self, quantity: u32) -> Self {
        Money(self.0.saturating_mul(quantity as u64))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Renders as `units.cents`, e.g. `12.99` (no currency symbol).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_units(units).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Float(units), &"a non-negative amount")
        })
    }
}

/// A percentage rate expressed in basis points (1/100 of a percent).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TaxRate {
    basis_points: u32,
}

/// The fixed 8% surcharge applied to every order.
pub const TAX_RATE: TaxRate = TaxRate::from_basis_points(800);

impl TaxRate {
    pub const fn from_basis_points(basis_points: u32) -> Self {
        TaxRate { basis_points }
    }

    pub const fn basis_points(self) -> u32 {
        self.basis_points
    }

    /// Exact tax on `amount`, in units of 1/10_000 of a cent.
    ///
    /// Kept unrounded so that totals stay linear in quantity; see
    /// [`round_scaled`] for the reporting step.
    pub fn scaled_tax_on(self, amount: Money) -> u128 {
        amount.cents() as u128 * self.basis_points as u128
    }
}

/// Number of scaled tax units in one cent.
pub const SCALE: u128 = 10_000;

/// Round a scaled amount (1/10_000 of a cent) half-up to whole cents.
pub fn round_scaled(scaled: u128) -> Money {
    let cents = (scaled + SCALE / 2) / SCALE;
    Money(u64::try_from(cents).unwrap_or(u64::MAX))
}
