use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::CatalogError;

/// A non-negative amount of money in centavos (hundredths of a real).
///
/// Totals stay exact under addition and quantity multiplication; the
/// two-decimal `R$` rendering is purely a display concern. Catalog files
/// write fractional reais (`price = 200.00`), converted once at load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    /// Price from raw centavos.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Price from whole reais.
    #[must_use]
    pub const fn from_reais(reais: u64) -> Self {
        Self(reais.saturating_mul(100))
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Line subtotal: unit price times quantity, saturating at the top end.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl TryFrom<f64> for Price {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidPrice { value });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = (value * 100.0).round() as u64;
        Ok(Self(cents))
    }
}

impl From<Price> for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from(price: Price) -> Self {
        price.0 as Self / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
