// ============================================================================
// Value Module
// The numeral value container, its input type and its factory
// ============================================================================

mod input;
mod roman_numeral;

pub mod factory;

pub use factory::{create_from_config, create_renderer, RomanNumeralBuilder};
pub use input::{is_numeral_like, NumeralInput};
pub use roman_numeral::RomanNumeralValue;
