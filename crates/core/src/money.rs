//! Monetary amounts in centavos.

use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative amount of Brazilian reais, stored in the smallest currency
/// unit (centavos).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

/// Slack for binary float noise when checking that an amount is a whole
/// number of centavos (`299.99 * 100.0` is `29998.999999999996`).
const CENTAVO_TOLERANCE: f64 = 1e-6;

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    pub const fn from_reais(reais: u64) -> Self {
        Self(reais * 100)
    }

    /// Convert an upstream floating-point amount of reais, rounding to the
    /// nearest centavo.
    ///
    /// Rejects negative and non-finite values.
    pub fn try_from_reais_f64(reais: f64) -> DomainResult<Self> {
        if !reais.is_finite() || reais < 0.0 {
            return Err(DomainError::invalid_input(format!(
                "invalid amount: {reais}"
            )));
        }
        Ok(Self((reais * 100.0).round() as u64))
    }

    /// Like [`Money::try_from_reais_f64`], but rejects amounts that do not
    /// land on a whole centavo instead of rounding them.
    ///
    /// For caller-supplied amounts that are compared against thresholds,
    /// where rounding could move a value across the boundary.
    pub fn try_from_reais_f64_exact(reais: f64) -> DomainResult<Self> {
        let money = Self::try_from_reais_f64(reais)?;
        if (reais * 100.0 - money.0 as f64).abs() > CENTAVO_TOLERANCE {
            return Err(DomainError::invalid_input(format!(
                "amount has fractional centavos: {reais}"
            )));
        }
        Ok(money)
    }

    pub const fn centavos(self) -> u64 {
        self.0
    }

    pub fn as_reais_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    pub fn saturating_add(self, rhs: Money) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, rhs: u64) -> Money {
        self.saturating_mul(rhs)
    }
}

/// Renders `R$ 12.50` (two decimals, dot separator).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "R$ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}
