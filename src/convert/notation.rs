// ============================================================================
// Notation Normalization
// Expansion of subtractive pairs into additive form, and the inverse
// ============================================================================

use crate::domain::{Glyph, Numeral};

/// Six dots, the additive form of "S"
const SIX_DOTS: &str = "••••••";

/// Subtractive pairs and the "S" shorthand with their additive forms,
/// in the order they are applied by [`expand`].
const EXPANSIONS: [(&str, &str); 7] = [
    ("CM", "DCCCC"),
    ("CD", "CCCC"),
    ("XC", "LXXXX"),
    ("XL", "XXXX"),
    ("IX", "VIIII"),
    ("IV", "IIII"),
    ("S", SIX_DOTS),
];

/// Rewrite subtractive pairs and "S" in additive form.
///
/// Every remaining symbol then counts at face value.
///
/// ```
/// use roman_numeral::convert::expand;
///
/// assert_eq!(expand("MCMXCIV"), "MDCCCCLXXXXIIII");
/// assert_eq!(expand("IS"), "I••••••");
/// ```
pub fn expand(numeral: &str) -> String {
    EXPANSIONS
        .iter()
        .fold(numeral.to_string(), |acc, (short, long)| {
            acc.replace(short, long)
        })
}

/// Rewrite additive runs back into subtractive pairs and "S".
///
/// Inverse of [`expand`] on any numeral the formatter produces.
pub fn compress(numeral: &str) -> String {
    EXPANSIONS
        .iter()
        .fold(numeral.to_string(), |acc, (short, long)| {
            acc.replace(long, short)
        })
}

/// Glyph-level expansion that also understands overlined magnitudes.
///
/// A power-of-ten glyph followed by the glyph five or ten times its weight is
/// rewritten additively, so `MV̄` becomes `MMMM` and `C̄M̄` becomes
/// `D̄C̄C̄C̄C̄`. "S" becomes six dots.
pub fn expand_glyphs(numeral: &Numeral) -> Numeral {
    let glyphs = numeral.glyphs();
    let mut expanded = Numeral::new();
    let mut i = 0;

    while i < glyphs.len() {
        let current = glyphs[i];

        if current == Glyph::Semis {
            expanded.extend_from_slice(&[Glyph::Dot; 6]);
            i += 1;
            continue;
        }

        if let Some(next) = glyphs.get(i + 1) {
            if let Some(additive) = subtractive_pair(current, *next) {
                for glyph in additive {
                    expanded.push(glyph);
                }
                i += 2;
                continue;
            }
        }

        expanded.push(current);
        i += 1;
    }

    expanded
}

/// Additive form of a subtractive pair, if `(unit, next)` is one.
fn subtractive_pair(unit: Glyph, next: Glyph) -> Option<impl Iterator<Item = Glyph>> {
    let unit_weight = unit.integer_weight()?;
    let next_weight = next.integer_weight()?;

    if !is_power_of_ten(unit_weight) {
        return None;
    }

    let five = if next_weight == unit_weight * 10 {
        Some(Glyph::from_weight(unit_weight * 5)?)
    } else if next_weight == unit_weight * 5 {
        None
    } else {
        return None;
    };

    let unit = Glyph::from_weight(unit_weight)?;
    Some(five.into_iter().chain(std::iter::repeat_n(unit, 4)))
}

fn is_power_of_ten(mut weight: u32) -> bool {
    while weight >= 10 && weight % 10 == 0 {
        weight /= 10;
    }
    weight == 1
}
