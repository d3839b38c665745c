// ============================================================================
// Numeral
// Ordered glyph sequence and the tokenizer that reads it from text
// ============================================================================

use super::config::is_valid_overline_style;
use super::glyph::{Glyph, Letter, COMBINING_OVERLINE, DOT, MACRON, NULLA, SEMIS};
use crate::numeric::NumeralError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SPAN_OPEN: &str = "<span";
const SPAN_STYLE_OPEN: &str = "<span style=\"";
const SPAN_STYLE_CLOSE: &str = "\">";
const SPAN_CLOSE: &str = "</span>";

/// Whether `tag` is exactly the open tag the HTML span renderer writes.
fn is_overline_tag(tag: &str) -> bool {
    tag.strip_prefix(SPAN_STYLE_OPEN)
        .and_then(|rest| rest.strip_suffix(SPAN_STYLE_CLOSE))
        .is_some_and(is_valid_overline_style)
}

/// A numeral as an ordered sequence of glyphs, highest place first.
///
/// `Display` writes the raw structural form, where an overlined letter is
/// followed by a spacing macron (`X¯`). Use an
/// [`OverlineRenderer`](crate::interfaces::OverlineRenderer) for display
/// output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Numeral {
    glyphs: SmallVec<[Glyph; 16]>,
}

impl Numeral {
    pub fn new() -> Self {
        Self::default()
    }

    /// The zero numeral, "N".
    pub fn nulla() -> Self {
        let mut numeral = Self::new();
        numeral.push(Glyph::Nulla);
        numeral
    }

    #[inline]
    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, glyphs: &[Glyph]) {
        self.glyphs.extend_from_slice(glyphs);
    }

    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    /// Whether any glyph carries an overline.
    pub fn has_overline(&self) -> bool {
        self.glyphs.iter().any(|g| g.is_overlined())
    }

    /// Sum of all glyph weights in twelfths, with no subtractive handling.
    pub fn additive_twelfths(&self) -> u64 {
        self.glyphs.iter().map(|g| g.twelfths()).sum()
    }

    /// Tokenize text, skipping characters outside the numeral alphabet.
    ///
    /// Accepts every form the bundled renderers produce: letters followed by
    /// a macron or a combining overline, and letters inside
    /// `<span style="...">...</span>` markup. Returns the numeral together
    /// with the number of characters that were skipped.
    ///
    /// Other span tags still overline their letters but count as skipped,
    /// as do stray closing tags and markers that do not follow a letter.
    pub fn tokenize(text: &str) -> (Self, usize) {
        let mut numeral = Self::new();
        let mut skipped = 0;
        let mut in_span = false;
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if rest.starts_with(SPAN_CLOSE) {
                    if !in_span {
                        skipped += SPAN_CLOSE.len();
                    }
                    in_span = false;
                    rest = &rest[SPAN_CLOSE.len()..];
                    continue;
                }
                if rest.starts_with(SPAN_OPEN) {
                    if let Some(end) = rest.find('>') {
                        let tag = &rest[..=end];
                        if in_span || !is_overline_tag(tag) {
                            skipped += tag.chars().count();
                        }
                        in_span = true;
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }

            rest = &rest[c.len_utf8()..];

            let glyph = match c {
                DOT => Glyph::Dot,
                SEMIS => Glyph::Semis,
                NULLA => Glyph::Nulla,
                _ => match Letter::from_char(c) {
                    Some(letter) => {
                        let marker = rest
                            .chars()
                            .next()
                            .filter(|m| matches!(*m, MACRON | COMBINING_OVERLINE));
                        if let Some(marker) = marker {
                            rest = &rest[marker.len_utf8()..];
                        }
                        if in_span || marker.is_some() {
                            Glyph::Overlined(letter)
                        } else {
                            Glyph::Letter(letter)
                        }
                    },
                    // markers, markup and anything else outside the alphabet
                    None => {
                        skipped += 1;
                        continue;
                    },
                },
            };
            numeral.push(glyph);
        }

        (numeral, skipped)
    }
}

impl FromIterator<Glyph> for Numeral {
    fn from_iter<T: IntoIterator<Item = Glyph>>(iter: T) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Numeral {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

impl FromStr for Numeral {
    type Err = NumeralError;

    /// Strict parse: any character outside the numeral alphabet is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numeral, skipped) = Self::tokenize(s);
        if skipped > 0 || numeral.is_empty() {
            return Err(NumeralError::TypeMismatch);
        }
        Ok(numeral)
    }
}
