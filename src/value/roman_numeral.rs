// ============================================================================
// Roman Numeral Value
// Container holding one quantity, readable as a numeral or a number
// ============================================================================

use super::input::NumeralInput;
use crate::convert::to_roman;
use crate::domain::{ConverterConfig, Numeral};
use crate::interfaces::{CombiningOverlineRenderer, OverlineRenderer};
use crate::numeric::{NumeralQuantity, NumeralResult};
use rust_decimal::Decimal;
use std::fmt;

/// A single numeric quantity that accepts and produces Roman numerals.
///
/// Arithmetic happens on the stored quantity; numerals are only parsed on
/// the way in and formatted on the way out.
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
///
/// let mut value = RomanNumeralValue::new();
/// value.set_value("IV").unwrap();
/// value.add("VI").unwrap();
/// assert_eq!(value.value_as_roman().unwrap(), "X");
/// ```
pub struct RomanNumeralValue {
    /// Stored quantity
    value: NumeralQuantity,

    /// Tally and input rules
    config: ConverterConfig,

    /// Display renderer for overlined letters
    renderer: Box<dyn OverlineRenderer>,
}

impl RomanNumeralValue {
    /// Create an empty value (zero) with the default configuration
    pub fn new() -> Self {
        Self::with_parts(
            ConverterConfig::default(),
            Box::new(CombiningOverlineRenderer),
        )
    }

    /// Create an empty value from a configuration and a renderer
    pub fn with_parts(config: ConverterConfig, renderer: Box<dyn OverlineRenderer>) -> Self {
        Self {
            value: NumeralQuantity::ZERO,
            config,
            renderer,
        }
    }

    /// Replace the stored quantity.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if the input is neither a numeral nor a
    /// numeric literal; the stored quantity is left unchanged.
    pub fn set_value(&mut self, input: impl Into<NumeralInput>) -> NumeralResult<()> {
        let input = input.into();
        let quantity = input.resolve(&self.config).inspect_err(|err| {
            tracing::debug!(?input, %err, "set_value rejected input");
        })?;

        self.value = quantity;
        tracing::trace!(value = %self.value, "numeral value set");
        Ok(())
    }

    /// Add to the stored quantity.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for unrecognised input and `Overflow` if the
    /// sum leaves the decimal range; the stored quantity is left unchanged.
    pub fn add(&mut self, input: impl Into<NumeralInput>) -> NumeralResult<()> {
        let input = input.into();
        let quantity = input.resolve(&self.config).inspect_err(|err| {
            tracing::debug!(?input, %err, "add rejected input");
        })?;

        self.value = self.value.checked_add(quantity)?;
        tracing::trace!(added = %quantity, value = %self.value, "numeral value accumulated");
        Ok(())
    }

    /// The stored quantity as a structural numeral.
    ///
    /// # Errors
    /// Returns `OutOfRange` for quantities above 999,999 or below zero.
    pub fn numeral(&self) -> NumeralResult<Numeral> {
        to_roman(self.value).inspect_err(|err| {
            tracing::debug!(value = %self.value, %err, "cannot format value as numeral");
        })
    }

    /// The stored quantity as display text, drawn by the configured renderer.
    ///
    /// # Errors
    /// Returns `OutOfRange` for quantities above 999,999 or below zero.
    pub fn value_as_roman(&self) -> NumeralResult<String> {
        self.numeral()
            .map(|numeral| self.renderer.render(&numeral))
    }

    /// The stored quantity, unmodified.
    #[inline]
    pub fn value_as_arabic(&self) -> Decimal {
        self.value.value()
    }

    #[inline]
    pub fn quantity(&self) -> NumeralQuantity {
        self.value
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Get the renderer name
    pub fn renderer_name(&self) -> &str {
        self.renderer.name()
    }
}

impl Default for RomanNumeralValue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RomanNumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RomanNumeralValue")
            .field("value", &self.value)
            .field("config", &self.config)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumeralError;

    fn roman_of(input: impl Into<NumeralInput>) -> String {
        let mut value = RomanNumeralValue::new();
        value.set_value(input).unwrap();
        value.value_as_roman().unwrap()
    }

    fn arabic_of(input: impl Into<NumeralInput>) -> Decimal {
        let mut value = RomanNumeralValue::new();
        value.set_value(input).unwrap();
        value.value_as_arabic()
    }

    #[test]
    fn test_new_value_is_zero() {
        let value = RomanNumeralValue::new();
        assert_eq!(value.value_as_arabic(), Decimal::ZERO);
        assert_eq!(value.value_as_roman().unwrap(), "N");
    }

    #[test]
    fn test_literal_scenarios() {
        assert_eq!(roman_of(2023), "MMXXIII");
        assert_eq!(arabic_of("MMXXIII"), Decimal::from(2023));
        assert_eq!(roman_of(1.5), "IS");
        assert_eq!(arabic_of("IS"), Decimal::new(15, 1));
    }

    #[test]
    fn test_zero_round_trip() {
        assert_eq!(roman_of(0), "N");
        assert_eq!(arabic_of("N"), Decimal::ZERO);
    }

    #[test]
    fn test_add_numerals() {
        let mut value = RomanNumeralValue::new();
        value.add("IV").unwrap();
        value.add("VI").unwrap();
        assert_eq!(value.value_as_roman().unwrap(), "X");

        let mut number = RomanNumeralValue::new();
        number.add(10).unwrap();
        assert_eq!(value.value_as_arabic(), number.value_as_arabic());
    }

    #[test]
    fn test_add_mixed_operands() {
        let mut value = RomanNumeralValue::new();
        value.set_value("MM").unwrap();
        value.add(23).unwrap();
        value.add("S").unwrap();
        assert_eq!(value.value_as_arabic(), Decimal::new(20235, 1));
        assert_eq!(value.value_as_roman().unwrap(), "MMXXIIIS");
    }

    #[test]
    fn test_set_value_replaces() {
        let mut value = RomanNumeralValue::new();
        value.set_value(100).unwrap();
        value.set_value("V").unwrap();
        assert_eq!(value.value_as_arabic(), Decimal::from(5));
    }

    #[test]
    fn test_type_mismatch_leaves_value_unchanged() {
        let mut value = RomanNumeralValue::new();
        value.set_value(7).unwrap();

        assert_eq!(value.set_value("hello"), Err(NumeralError::TypeMismatch));
        assert_eq!(value.set_value(None::<i32>), Err(NumeralError::TypeMismatch));
        assert_eq!(value.set_value(""), Err(NumeralError::TypeMismatch));
        assert_eq!(value.add("hello"), Err(NumeralError::TypeMismatch));
        assert_eq!(value.add(f64::INFINITY), Err(NumeralError::TypeMismatch));
        assert_eq!(value.set_value("Sorry"), Err(NumeralError::TypeMismatch));
        assert_eq!(value.set_value("5S"), Err(NumeralError::TypeMismatch));
        assert_eq!(value.add("Sure"), Err(NumeralError::TypeMismatch));

        assert_eq!(value.value_as_arabic(), Decimal::from(7));
    }

    #[test]
    fn test_out_of_range_on_format() {
        let mut value = RomanNumeralValue::new();
        value.set_value(999_999).unwrap();
        assert!(value.value_as_roman().is_ok());

        value.add(1).unwrap();
        assert_eq!(value.value_as_arabic(), Decimal::from(1_000_000));
        assert_eq!(value.value_as_roman(), Err(NumeralError::OutOfRange));
    }

    #[test]
    fn test_overflow_leaves_value_unchanged() {
        let mut value = RomanNumeralValue::new();
        value.set_value(Decimal::MAX).unwrap();
        assert_eq!(value.add(1), Err(NumeralError::Overflow));
        assert_eq!(value.value_as_arabic(), Decimal::MAX);
    }

    #[test]
    fn test_default_renderer_uses_combining_overline() {
        assert_eq!(roman_of(9876), "MX\u{0305}DCCCLXXVI");
    }

    #[test]
    fn test_debug_names_renderer() {
        let debug = format!("{:?}", RomanNumeralValue::new());
        assert!(debug.contains("combining-overline"));
    }
}
