// ============================================================================
// Convert Module
// Pure conversions between numerals and quantities
// ============================================================================
//
// Layering:
// - digits: fragment tables for place digits and twelfths
// - notation: expansion/compression of subtractive notation
// - to_arabic: numeral text -> quantity
// - to_roman: quantity -> structural numeral

pub mod digits;
mod notation;
mod to_arabic;
mod to_roman;

pub use digits::{fraction_fragment, fragment};
pub use notation::{compress, expand, expand_glyphs};
pub use to_arabic::{to_arabic, to_arabic_with};
pub use to_roman::to_roman;
