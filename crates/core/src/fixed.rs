//! Fixed-point arithmetic for prices and quantities
//!
//! Wraps `rust_decimal::Decimal` in a `Fixed` type so every money value in
//! the gateway carries exact decimal semantics. Floats never touch the
//! order path.

use rust_decimal::{prelude::*, Decimal};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

/// Exact decimal value used for all prices and quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(Decimal);

impl Fixed {
    pub const ZERO: Fixed = Fixed(Decimal::ZERO);
    pub const ONE: Fixed = Fixed(Decimal::ONE);

    /// Create from an integer.
    pub fn from_i64(value: i64) -> Self {
        Fixed(Decimal::from(value))
    }

    /// Create from a float. Lossy at the edges of f64 precision; prefer
    /// `from_str_exact` when the source is textual.
    pub fn from_f64(value: f64) -> Result<Self, FixedError> {
        Decimal::try_from(value)
            .map(Fixed)
            .map_err(|_| FixedError::InvalidValue)
    }

    /// Parse from a decimal string without rounding.
    pub fn from_str_exact(s: &str) -> Result<Self, FixedError> {
        Decimal::from_str(s)
            .map(Fixed)
            .map_err(|_| FixedError::InvalidValue)
    }

    /// Underlying decimal value.
    pub fn to_decimal(self) -> Decimal {
        self.0
    }

    /// Convert to f64 (may lose precision; display/logging only).
    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn abs(self) -> Self {
        Fixed(self.0.abs())
    }

    /// Round to the given number of decimal places.
    pub fn round_dp(self, dp: u32) -> Self {
        Fixed(self.0.round_dp(dp))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedError {
    #[error("invalid decimal value")]
    InvalidValue,
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Self) -> Self::Output {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Self) -> Self::Output {
        Fixed(self.0 - rhs.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Self) -> Self::Output {
        Fixed(self.0 * rhs.0)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    fn div(self, rhs: Self) -> Self::Output {
        Fixed(self.0 / rhs.0)
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fixed {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_exact(s)
    }
}

impl From<Decimal> for Fixed {
    fn from(value: Decimal) -> Self {
        Fixed(value)
    }
}

impl From<Fixed> for Decimal {
    fn from(fixed: Fixed) -> Self {
        fixed.0
    }
}
