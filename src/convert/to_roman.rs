// ============================================================================
// Value → Numeral
// Place-digit decomposition and fragment lookup
// ============================================================================

use super::digits::{fraction_fragment, fragment, PLACES};
use crate::domain::Numeral;
use crate::numeric::{NumeralError, NumeralQuantity, NumeralResult};
use arrayvec::ArrayVec;

/// Format a quantity as a structural numeral.
///
/// Zero is written "N". The fractional part is rounded to the nearest
/// twelfth; a fraction that rounds to a whole unit carries into the ones
/// digit.
///
/// # Errors
/// Returns `OutOfRange` for values above 999,999 and for negative values.
///
/// ```
/// use roman_numeral::convert::to_roman;
/// use roman_numeral::numeric::NumeralQuantity;
///
/// let numeral = to_roman(NumeralQuantity::from_integer(2023)).unwrap();
/// assert_eq!(numeral.to_string(), "MMXXIII");
/// ```
pub fn to_roman(quantity: NumeralQuantity) -> NumeralResult<Numeral> {
    let (mut integer, mut twelfths) = quantity.split_twelfths()?;

    if twelfths == NumeralQuantity::TWELFTHS_PER_UNIT && integer > 0 {
        integer += 1;
        twelfths = 0;
        if integer > NumeralQuantity::MAX_INTEGER {
            return Err(NumeralError::OutOfRange);
        }
    }

    if integer == 0 && twelfths == 0 {
        return Ok(Numeral::nulla());
    }

    let mut numeral = Numeral::new();

    for (place, digit) in place_digits(integer).into_iter().enumerate().rev() {
        let glyphs = fragment(place, digit).ok_or(NumeralError::OutOfRange)?;
        numeral.extend_from_slice(&glyphs);
    }

    let fraction = fraction_fragment(twelfths).ok_or(NumeralError::OutOfRange)?;
    numeral.extend_from_slice(&fraction);

    Ok(numeral)
}

/// Decimal digits of `value`, ones first.
fn place_digits(mut value: u32) -> ArrayVec<u8, PLACES> {
    let mut digits = ArrayVec::new();
    for _ in 0..PLACES {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}
