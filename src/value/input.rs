// ============================================================================
// Numeral Input
// Classification of caller input as numeral text or numeric literal
// ============================================================================

use crate::convert::to_arabic_with;
use crate::domain::glyph::{COMBINING_OVERLINE, DOT, MACRON, NULLA, SEMIS};
use crate::domain::{ConverterConfig, Letter};
use crate::numeric::{NumeralError, NumeralQuantity, NumeralResult};
use rust_decimal::Decimal;

/// A value handed to `set_value` or `add`.
///
/// Built through `From` conversions, so callers pass `"XIV"`, `14`, `1.5`
/// or `None` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum NumeralInput {
    /// Text: a numeral string or a numeric literal
    Text(String),
    /// An exact decimal number
    Number(Decimal),
    /// A floating point number, checked for finiteness on use
    Float(f64),
    /// No value at all
    Missing,
}

/// Whether `text` should be read as a numeral.
///
/// A letter, dot or overline marker anywhere marks the text as a numeral.
/// "S" and "N" only count when the whole text is made of numeral glyphs, so
/// "S" reads as one half and "N" as zero while "Sorry" does not.
pub fn is_numeral_like(text: &str) -> bool {
    let text = text.trim();
    let has_numeral_glyph = text.chars().any(|c| {
        Letter::from_char(c).is_some() || matches!(c, DOT | MACRON | COMBINING_OVERLINE)
    });

    has_numeral_glyph
        || (!text.is_empty()
            && text
                .chars()
                .filter(|c| !c.is_whitespace())
                .all(is_numeral_char))
}

fn is_numeral_char(c: char) -> bool {
    Letter::from_char(c).is_some()
        || matches!(c, DOT | SEMIS | NULLA | MACRON | COMBINING_OVERLINE)
}

impl NumeralInput {
    /// Resolve the input to a quantity.
    ///
    /// Numeral glyphs take precedence over numeric parsing.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for text that is neither a numeral nor a
    /// numeric literal, for non-finite floats, and for `Missing`.
    pub fn resolve(&self, config: &ConverterConfig) -> NumeralResult<NumeralQuantity> {
        match self {
            NumeralInput::Text(text) if is_numeral_like(text) => to_arabic_with(text, config),
            NumeralInput::Text(text) => text.parse(),
            NumeralInput::Number(value) => Ok(NumeralQuantity::new(*value)),
            NumeralInput::Float(value) => NumeralQuantity::from_f64(*value),
            NumeralInput::Missing => Err(NumeralError::TypeMismatch),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for NumeralInput {
    fn from(value: &str) -> Self {
        NumeralInput::Text(value.to_string())
    }
}

impl From<String> for NumeralInput {
    fn from(value: String) -> Self {
        NumeralInput::Text(value)
    }
}

impl From<&String> for NumeralInput {
    fn from(value: &String) -> Self {
        NumeralInput::Text(value.clone())
    }
}

impl From<Decimal> for NumeralInput {
    fn from(value: Decimal) -> Self {
        NumeralInput::Number(value)
    }
}

impl From<NumeralQuantity> for NumeralInput {
    fn from(value: NumeralQuantity) -> Self {
        NumeralInput::Number(value.value())
    }
}

impl From<f64> for NumeralInput {
    fn from(value: f64) -> Self {
        NumeralInput::Float(value)
    }
}

impl From<f32> for NumeralInput {
    fn from(value: f32) -> Self {
        NumeralInput::Float(value as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumeralInput {
                fn from(value: $t) -> Self {
                    NumeralInput::Number(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<NumeralInput>> From<Option<T>> for NumeralInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumeralInput::Missing, Into::into)
    }
}
