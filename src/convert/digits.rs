// ============================================================================
// Digit Tables
// Numeral fragments for each decimal digit at each place, and for twelfths
// ============================================================================

use crate::domain::{Glyph, Letter};
use arrayvec::ArrayVec;

/// Number of decimal places a numeral can express (1 .. 100,000)
pub const PLACES: usize = 6;

/// Longest digit fragment ("VIII")
pub const MAX_DIGIT_GLYPHS: usize = 4;

/// Longest fraction fragment ("S•••••")
pub const MAX_FRACTION_GLYPHS: usize = 6;

pub type DigitFragment = ArrayVec<Glyph, MAX_DIGIT_GLYPHS>;
pub type FractionFragment = ArrayVec<Glyph, MAX_FRACTION_GLYPHS>;

#[derive(Clone, Copy)]
enum Stroke {
    Unit,
    Five,
    Ten,
}

use Stroke::{Five, Ten, Unit};

/// Subtractive shape of each digit 0-9
const SHAPES: [&[Stroke]; 10] = [
    &[],
    &[Unit],
    &[Unit, Unit],
    &[Unit, Unit, Unit],
    &[Unit, Five],
    &[Five],
    &[Five, Unit],
    &[Five, Unit, Unit],
    &[Five, Unit, Unit, Unit],
    &[Unit, Ten],
];

const fn plain(letter: Letter) -> Glyph {
    Glyph::Letter(letter)
}

const fn bar(letter: Letter) -> Glyph {
    Glyph::Overlined(letter)
}

/// (unit, five, ten) glyphs for each place, ones first.
///
/// Thousands keep plain M as the unit and switch to overlined V and X for
/// five and ten thousand.
const PLACE_GLYPHS: [[Glyph; 3]; PLACES] = [
    [plain(Letter::I), plain(Letter::V), plain(Letter::X)],
    [plain(Letter::X), plain(Letter::L), plain(Letter::C)],
    [plain(Letter::C), plain(Letter::D), plain(Letter::M)],
    [plain(Letter::M), bar(Letter::V), bar(Letter::X)],
    [bar(Letter::X), bar(Letter::L), bar(Letter::C)],
    [bar(Letter::C), bar(Letter::D), bar(Letter::M)],
];

/// Fragment for `digit × 10^place`.
///
/// Returns `None` when `place` or `digit` is out of range.
pub fn fragment(place: usize, digit: u8) -> Option<DigitFragment> {
    let [unit, five, ten] = *PLACE_GLYPHS.get(place)?;
    let shape = SHAPES.get(digit as usize)?;

    Some(
        shape
            .iter()
            .map(|stroke| match stroke {
                Unit => unit,
                Five => five,
                Ten => ten,
            })
            .collect(),
    )
}

/// Fragment for a count of twelfths, 0-12.
///
/// 1-5 are dots, 6 is "S", 7-11 are "S" followed by dots, and 12 is a whole
/// "I" for a fraction that rounded up to one.
pub fn fraction_fragment(twelfths: u8) -> Option<FractionFragment> {
    let mut fragment = FractionFragment::new();
    match twelfths {
        0 => {},
        1..=5 => fragment.extend(std::iter::repeat_n(Glyph::Dot, twelfths as usize)),
        6..=11 => {
            fragment.push(Glyph::Semis);
            fragment.extend(std::iter::repeat_n(Glyph::Dot, twelfths as usize - 6));
        },
        12 => fragment.push(plain(Letter::I)),
        _ => return None,
    }
    Some(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Numeral;

    fn text(place: usize, digit: u8) -> String {
        fragment(place, digit)
            .unwrap()
            .into_iter()
            .collect::<Numeral>()
            .to_string()
    }

    fn fraction_text(twelfths: u8) -> String {
        fraction_fragment(twelfths)
            .unwrap()
            .into_iter()
            .collect::<Numeral>()
            .to_string()
    }

    #[test]
    fn test_ones_tens_hundreds() {
        let ones: Vec<String> = (0..10).map(|d| text(0, d)).collect();
        assert_eq!(
            ones,
            ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"]
        );
        assert_eq!(text(1, 4), "XL");
        assert_eq!(text(1, 9), "XC");
        assert_eq!(text(2, 4), "CD");
        assert_eq!(text(2, 9), "CM");
    }

    #[test]
    fn test_thousands_use_overlines() {
        let thousands: Vec<String> = (0..10).map(|d| text(3, d)).collect();
        assert_eq!(
            thousands,
            ["", "M", "MM", "MMM", "MV¯", "V¯", "V¯M", "V¯MM", "V¯MMM", "MX¯"]
        );
    }

    #[test]
    fn test_upper_places() {
        assert_eq!(text(4, 1), "X¯");
        assert_eq!(text(4, 4), "X¯L¯");
        assert_eq!(text(4, 9), "X¯C¯");
        assert_eq!(text(5, 8), "D¯C¯C¯C¯");
        assert_eq!(text(5, 9), "C¯M¯");
    }

    #[test]
    fn test_out_of_range() {
        assert!(fragment(6, 1).is_none());
        assert!(fragment(0, 10).is_none());
        assert!(fraction_fragment(13).is_none());
    }

    #[test]
    fn test_fraction_table() {
        let fractions: Vec<String> = (0..=12).map(fraction_text).collect();
        assert_eq!(
            fractions,
            [
                "", "•", "••", "•••", "••••", "•••••", "S", "S•", "S••", "S•••", "S••••",
                "S•••••", "I"
            ]
        );
    }
}
