// ============================================================================
// Roman Numeral Library
// Conversion between Roman numerals and numbers, with vinculum and twelfths
// ============================================================================

//! # Roman Numeral
//!
//! Converts Roman numerals to numbers and back, including overlined letters
//! for values up to 999,999 and duodecimal fractions.
//!
//! ## Features
//!
//! - **Structural numerals**: overlines are glyph data, drawn by a pluggable
//!   [`OverlineRenderer`](interfaces::OverlineRenderer)
//! - **Twelfths fractions**: dots for unciae and "S" for one half
//! - **Exact accumulation** on decimal quantities, accepting numerals or
//!   numbers as operands
//! - **Normalization**: expansion and compression of subtractive notation
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let mut value = RomanNumeralValue::new();
//! value.set_value("MMXXIII").unwrap();
//! assert_eq!(value.value_as_arabic(), Decimal::from(2023));
//!
//! value.set_value(1.5).unwrap();
//! assert_eq!(value.value_as_roman().unwrap(), "IS");
//!
//! // HTML output wraps runs of overlined letters in a single span
//! let mut web = RomanNumeralBuilder::new().html_rendering().build().unwrap();
//! web.set_value(9876).unwrap();
//! assert_eq!(
//!     web.value_as_roman().unwrap(),
//!     "M<span style=\"text-decoration: overline\">X</span>DCCCLXXVI"
//! );
//! ```

pub mod convert;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;
pub mod value;

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert::{compress, expand, to_arabic, to_arabic_with, to_roman};
    pub use crate::domain::{ConverterConfig, Glyph, Letter, Numeral, OverlineWeight, RendererKind};
    pub use crate::interfaces::{
        CombiningOverlineRenderer, HtmlSpanRenderer, MacronRenderer, OverlineRenderer,
    };
    pub use crate::numeric::{NumeralError, NumeralQuantity, NumeralResult};
    pub use crate::value::{create_from_config, NumeralInput, RomanNumeralBuilder, RomanNumeralValue};
}
