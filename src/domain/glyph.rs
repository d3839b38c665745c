// ============================================================================
// Glyph Model
// Letters, overlined letters and fraction marks that make up a numeral
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dot glyph worth one twelfth (uncia)
pub const DOT: char = '•';

/// Semis glyph worth one half
pub const SEMIS: char = 'S';

/// Nulla glyph used for zero
pub const NULLA: char = 'N';

/// Spacing macron written after a letter to mark an overline
pub const MACRON: char = '¯';

/// Combining overline written after a letter to mark an overline
pub const COMBINING_OVERLINE: char = '\u{0305}';

/// Multiplier carried by an overlined letter
pub const OVERLINE_MULTIPLIER: u32 = 1_000;

// ============================================================================
// Letter
// ============================================================================

/// The seven classical numeral letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Letter {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Letter {
    /// All letters in ascending weight
    pub const ALL: [Letter; 7] = [
        Letter::I,
        Letter::V,
        Letter::X,
        Letter::L,
        Letter::C,
        Letter::D,
        Letter::M,
    ];

    /// Weight of the plain letter.
    #[inline]
    pub const fn weight(self) -> u32 {
        match self {
            Letter::I => 1,
            Letter::V => 5,
            Letter::X => 10,
            Letter::L => 50,
            Letter::C => 100,
            Letter::D => 500,
            Letter::M => 1000,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Letter::I => 'I',
            Letter::V => 'V',
            Letter::X => 'X',
            Letter::L => 'L',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::M => 'M',
        }
    }

    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Letter::I),
            'V' => Some(Letter::V),
            'X' => Some(Letter::X),
            'L' => Some(Letter::L),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'M' => Some(Letter::M),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Glyph
// ============================================================================

/// One unit of a numeral.
///
/// The overline is structural: `Overlined(Letter::V)` is a V carrying the
/// thousandfold bar, independent of how a renderer chooses to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Glyph {
    /// "N", the zero numeral
    Nulla,
    /// A plain letter
    Letter(Letter),
    /// A letter under an overline
    Overlined(Letter),
    /// One twelfth
    Dot,
    /// One half ("S")
    Semis,
}

impl Glyph {
    /// Weight of an integer glyph, counting the overline.
    ///
    /// Returns `None` for fraction glyphs and nulla.
    #[inline]
    pub const fn integer_weight(self) -> Option<u32> {
        match self {
            Glyph::Letter(letter) => Some(letter.weight()),
            Glyph::Overlined(letter) => Some(letter.weight() * OVERLINE_MULTIPLIER),
            Glyph::Nulla | Glyph::Dot | Glyph::Semis => None,
        }
    }

    /// Weight of the glyph in twelfths, counting the overline.
    #[inline]
    pub const fn twelfths(self) -> u64 {
        match self {
            Glyph::Letter(letter) => letter.weight() as u64 * 12,
            Glyph::Overlined(letter) => {
                letter.weight() as u64 * OVERLINE_MULTIPLIER as u64 * 12
            },
            Glyph::Dot => 1,
            Glyph::Semis => 6,
            Glyph::Nulla => 0,
        }
    }

    /// The glyph that writes `weight` as a single symbol, if any.
    ///
    /// Thousands use plain M; higher magnitudes use overlined letters.
    pub const fn from_weight(weight: u32) -> Option<Self> {
        let glyph = match weight {
            1 => Glyph::Letter(Letter::I),
            5 => Glyph::Letter(Letter::V),
            10 => Glyph::Letter(Letter::X),
            50 => Glyph::Letter(Letter::L),
            100 => Glyph::Letter(Letter::C),
            500 => Glyph::Letter(Letter::D),
            1_000 => Glyph::Letter(Letter::M),
            5_000 => Glyph::Overlined(Letter::V),
            10_000 => Glyph::Overlined(Letter::X),
            50_000 => Glyph::Overlined(Letter::L),
            100_000 => Glyph::Overlined(Letter::C),
            500_000 => Glyph::Overlined(Letter::D),
            1_000_000 => Glyph::Overlined(Letter::M),
            _ => return None,
        };
        Some(glyph)
    }

    #[inline]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Glyph::Letter(letter) | Glyph::Overlined(letter) => Some(letter),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_overlined(self) -> bool {
        matches!(self, Glyph::Overlined(_))
    }

    /// The bare character, without any overline marker.
    #[inline]
    pub const fn base_char(self) -> char {
        match self {
            Glyph::Letter(letter) | Glyph::Overlined(letter) => letter.as_char(),
            Glyph::Nulla => NULLA,
            Glyph::Dot => DOT,
            Glyph::Semis => SEMIS,
        }
    }
}

impl From<Letter> for Glyph {
    #[inline]
    fn from(letter: Letter) -> Self {
        Glyph::Letter(letter)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_overlined() {
            write!(f, "{}{}", self.base_char(), MACRON)
        } else {
            write!(f, "{}", self.base_char())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_roundtrip_chars() {
        for letter in Letter::ALL {
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }
        assert_eq!(Letter::from_char('S'), None);
        assert_eq!(Letter::from_char('i'), None);
    }

    #[test]
    fn test_weights() {
        assert_eq!(Glyph::Letter(Letter::V).integer_weight(), Some(5));
        assert_eq!(Glyph::Overlined(Letter::V).integer_weight(), Some(5_000));
        assert_eq!(Glyph::Dot.integer_weight(), None);
        assert_eq!(Glyph::Semis.twelfths(), 6);
        assert_eq!(Glyph::Letter(Letter::I).twelfths(), 12);
    }

    #[test]
    fn test_from_weight() {
        assert_eq!(Glyph::from_weight(1_000), Some(Glyph::Letter(Letter::M)));
        assert_eq!(
            Glyph::from_weight(50_000),
            Some(Glyph::Overlined(Letter::L))
        );
        assert_eq!(Glyph::from_weight(4), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Glyph::Overlined(Letter::X).to_string(), "X¯");
        assert_eq!(Glyph::Letter(Letter::X).to_string(), "X");
        assert_eq!(Glyph::Dot.to_string(), "•");
        assert_eq!(Glyph::Nulla.to_string(), "N");
    }
}
