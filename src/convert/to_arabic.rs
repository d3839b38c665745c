// ============================================================================
// Numeral → Value
// Expands subtractive notation and tallies glyph weights
// ============================================================================

use super::notation::{expand, expand_glyphs};
use crate::domain::glyph::DOT;
use crate::domain::{ConverterConfig, Letter, Numeral, OverlineWeight};
use crate::numeric::{NumeralError, NumeralQuantity, NumeralResult};
use rust_decimal::Decimal;

/// Read a numeral with the default configuration.
///
/// Characters outside the numeral alphabet contribute nothing.
///
/// ```
/// use roman_numeral::convert::to_arabic;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_arabic("MMXXIII").value(), Decimal::from(2023));
/// assert_eq!(to_arabic("IS").value(), Decimal::new(15, 1));
/// ```
pub fn to_arabic(numeral: &str) -> NumeralQuantity {
    let (parsed, _) = Numeral::tokenize(numeral);
    tally_thousandfold(&parsed)
}

/// Read a numeral under `config`.
///
/// # Errors
/// Returns `TypeMismatch` when `config.strict_alphabet` is set and the text
/// contains characters outside the numeral alphabet.
pub fn to_arabic_with(numeral: &str, config: &ConverterConfig) -> NumeralResult<NumeralQuantity> {
    let (parsed, skipped) = Numeral::tokenize(numeral);

    if skipped > 0 {
        if config.strict_alphabet {
            tracing::debug!(numeral, skipped, "rejecting numeral with unknown characters");
            return Err(NumeralError::TypeMismatch);
        }
        tracing::trace!(numeral, skipped, "ignoring unknown characters in numeral");
    }

    let quantity = match config.overline_weight {
        OverlineWeight::Thousandfold => tally_thousandfold(&parsed),
        OverlineWeight::BaseWeight => tally_base_weight(numeral),
    };

    Ok(quantity)
}

/// Expand the glyph sequence, then sum weights with overlines counted.
fn tally_thousandfold(numeral: &Numeral) -> NumeralQuantity {
    let twelfths = expand_glyphs(numeral).additive_twelfths();
    from_twelfths_total(twelfths)
}

/// Expand the text, then count each letter at its plain weight.
///
/// Overline markers are not counted, so `V¯` reads as 5.
fn tally_base_weight(numeral: &str) -> NumeralQuantity {
    let expanded = expand(numeral);

    let twelfths: u64 = expanded
        .chars()
        .map(|c| match Letter::from_char(c) {
            Some(letter) => letter.weight() as u64 * 12,
            None if c == DOT => 1,
            None => 0,
        })
        .sum();

    from_twelfths_total(twelfths)
}

fn from_twelfths_total(twelfths: u64) -> NumeralQuantity {
    let units = Decimal::from(twelfths) / Decimal::from(NumeralQuantity::TWELFTHS_PER_UNIT);
    NumeralQuantity::new(units)
}
