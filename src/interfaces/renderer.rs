// ============================================================================
// Overline Renderer Interface
// Turns a structural numeral into display text
// ============================================================================

use crate::domain::config::{is_valid_overline_style, DEFAULT_OVERLINE_STYLE};
use crate::domain::glyph::{COMBINING_OVERLINE, MACRON};
use crate::domain::Numeral;
use crate::numeric::{NumeralError, NumeralResult};

/// Strategy interface for drawing overlined letters
/// Implementations: combining overline, spacing macron, HTML span
pub trait OverlineRenderer: Send + Sync {
    /// Render a numeral for display
    fn render(&self, numeral: &Numeral) -> String;

    /// Get the renderer name for logging
    fn name(&self) -> &str;
}

/// Writes each overlined letter followed by a per-letter marker
fn render_with_marker(numeral: &Numeral, marker: char) -> String {
    let mut out = String::with_capacity(numeral.len() * 2);
    for glyph in numeral {
        out.push(glyph.base_char());
        if glyph.is_overlined() {
            out.push(marker);
        }
    }
    out
}

/// U+0305 COMBINING OVERLINE after each overlined letter
#[derive(Debug, Clone, Copy, Default)]
pub struct CombiningOverlineRenderer;

impl OverlineRenderer for CombiningOverlineRenderer {
    fn render(&self, numeral: &Numeral) -> String {
        render_with_marker(numeral, COMBINING_OVERLINE)
    }

    fn name(&self) -> &str {
        "combining-overline"
    }
}

/// Spacing macron after each overlined letter, same as `Numeral`'s `Display`
#[derive(Debug, Clone, Copy, Default)]
pub struct MacronRenderer;

impl OverlineRenderer for MacronRenderer {
    fn render(&self, numeral: &Numeral) -> String {
        render_with_marker(numeral, MACRON)
    }

    fn name(&self) -> &str {
        "macron"
    }
}

/// Wraps every maximal run of overlined letters in one styled span
#[derive(Debug, Clone)]
pub struct HtmlSpanRenderer {
    open_tag: String,
}

impl HtmlSpanRenderer {
    pub fn new() -> Self {
        Self {
            open_tag: open_tag(DEFAULT_OVERLINE_STYLE),
        }
    }

    /// The style is placed verbatim in the `style` attribute.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for an empty style or one containing quotes
    /// or angle brackets, which would not read back as a numeral.
    pub fn with_style(style: &str) -> NumeralResult<Self> {
        if !is_valid_overline_style(style) {
            return Err(NumeralError::InvalidConfig);
        }
        Ok(Self {
            open_tag: open_tag(style),
        })
    }
}

fn open_tag(style: &str) -> String {
    format!("<span style=\"{}\">", style)
}

impl Default for HtmlSpanRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlineRenderer for HtmlSpanRenderer {
    fn render(&self, numeral: &Numeral) -> String {
        let mut out = String::new();
        let mut in_run = false;

        for glyph in numeral {
            if glyph.is_overlined() != in_run {
                out.push_str(if in_run { "</span>" } else { self.open_tag.as_str() });
                in_run = !in_run;
            }
            out.push(glyph.base_char());
        }

        if in_run {
            out.push_str("</span>");
        }
        out
    }

    fn name(&self) -> &str {
        "html-span"
    }
}
