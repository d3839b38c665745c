// ============================================================================
// Numeral Quantity
// Decimal-backed quantity with twelfths decomposition for numeral output
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A real-valued quantity held by a numeral container.
///
/// Arithmetic is exact decimal arithmetic. The fractional part is only
/// resolved to twelfths when the quantity is written out as a numeral
/// (see [`NumeralQuantity::split_twelfths`]).
///
/// # Example
/// ```
/// use roman_numeral::numeric::NumeralQuantity;
///
/// let q: NumeralQuantity = "1.5".parse().unwrap();
/// assert_eq!(q.split_twelfths().unwrap(), (1, 6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct NumeralQuantity(Decimal);

impl NumeralQuantity {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(Decimal::ONE);

    /// Largest integer part a numeral can express
    pub const MAX_INTEGER: u32 = 999_999;

    /// Roman fractions are counted in twelfths (unciae)
    pub const TWELFTHS_PER_UNIT: u8 = 12;

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from an integer part and a count of twelfths.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `twelfths` is 12 or more.
    pub fn from_twelfths(integer: u32, twelfths: u8) -> NumeralResult<Self> {
        if twelfths >= Self::TWELFTHS_PER_UNIT {
            return Err(NumeralError::OutOfRange);
        }
        let fraction = Decimal::from(twelfths) / Decimal::from(Self::TWELFTHS_PER_UNIT);
        Ok(Self(Decimal::from(integer) + fraction))
    }

    /// Create from a floating point literal.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for NaN, infinities, and values outside the
    /// decimal range.
    pub fn from_f64(value: f64) -> NumeralResult<Self> {
        if !value.is_finite() {
            return Err(NumeralError::TypeMismatch);
        }
        Decimal::from_f64(value)
            .map(Self)
            .ok_or(NumeralError::TypeMismatch)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the underlying decimal value.
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub fn integer_part(self) -> Decimal {
        self.0.trunc()
    }

    /// Get the fractional part (`value - floor(value)` for non-negative values).
    #[inline]
    pub fn fractional_part(self) -> Decimal {
        self.0.fract()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result exceeds the decimal range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumeralResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumeralError::Overflow)
    }

    /// Split into an integer part and the nearest count of twelfths.
    ///
    /// The twelfths count is rounded half away from zero and lies in
    /// `0..=12`; a count of 12 means the fraction rounded up to a whole unit
    /// and the caller decides how to carry it.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative values and values above 999,999.
    pub fn split_twelfths(self) -> NumeralResult<(u32, u8)> {
        if self.is_negative() || self.0 > Decimal::from(Self::MAX_INTEGER) {
            return Err(NumeralError::OutOfRange);
        }

        let integer = self
            .integer_part()
            .to_u32()
            .ok_or(NumeralError::OutOfRange)?;

        let twelfths = (self.fractional_part() * Decimal::from(Self::TWELFTHS_PER_UNIT))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .ok_or(NumeralError::OutOfRange)?;

        Ok((integer, twelfths))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Decimal> for NumeralQuantity {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<NumeralQuantity> for Decimal {
    #[inline]
    fn from(value: NumeralQuantity) -> Self {
        value.0
    }
}

impl fmt::Display for NumeralQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for NumeralQuantity {
    type Err = NumeralError;

    /// Parse a numeric literal.
    ///
    /// # Examples
    /// - "2023" -> 2023
    /// - " 1.5 " -> 1.5
    /// - "+7" -> 7
    /// - "1e3" -> 1000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // rust_decimal accepts digit-group underscores
        if s.is_empty() || s.contains('_') {
            return Err(NumeralError::TypeMismatch);
        }

        let unsigned = s.strip_prefix('+').unwrap_or(s);

        Decimal::from_str(unsigned)
            .or_else(|_| Decimal::from_scientific(unsigned))
            .map(Self)
            .map_err(|_| NumeralError::TypeMismatch)
    }
}

// ============================================================================
// Tests
// ============================================================================
