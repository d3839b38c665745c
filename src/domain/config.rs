// ============================================================================
// Converter Configuration
// Tally rules, input strictness and display rendering for numeral values
// ============================================================================

use crate::numeric::{NumeralError, NumeralResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default style for the HTML span renderer
pub const DEFAULT_OVERLINE_STYLE: &str = "text-decoration: overline";

/// Whether `style` can sit inside a span's `style="..."` attribute and be
/// read back: non-empty and free of quotes and angle brackets.
pub fn is_valid_overline_style(style: &str) -> bool {
    !style.trim().is_empty() && !style.contains(['"', '<', '>'])
}

// ============================================================================
// Overline Weight
// ============================================================================

/// How the numeral reader counts an overlined letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverlineWeight {
    /// Overlined letters count a thousandfold (V̄ = 5,000)
    /// - Every numeral the formatter produces reads back to its value
    #[default]
    Thousandfold,

    /// Overlined letters count at their plain weight (V̄ = 5)
    /// - Matches older readers that only tallied letters
    /// - Large numerals do not read back to their value
    BaseWeight,
}

// ============================================================================
// Renderer Kind
// ============================================================================

/// Which overline renderer a numeral value uses for display output
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RendererKind {
    /// Letter followed by U+0305 COMBINING OVERLINE
    #[default]
    CombiningOverline,

    /// Letter followed by a spacing macron (the raw structural form)
    Macron,

    /// Runs of overlined letters wrapped in a styled HTML span
    HtmlSpan {
        /// Inline CSS placed in the span's `style` attribute
        style: String,
    },
}

impl RendererKind {
    /// HTML span rendering with the standard overline style
    pub fn html_span() -> Self {
        RendererKind::HtmlSpan {
            style: DEFAULT_OVERLINE_STYLE.to_string(),
        }
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration shared by the numeral reader, the formatter and the value
/// container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Weight given to overlined letters when reading a numeral
    pub overline_weight: OverlineWeight,

    /// Reject numeral strings containing characters outside the numeral
    /// alphabet instead of ignoring them
    pub strict_alphabet: bool,

    /// Display renderer for `value_as_roman`
    pub renderer: RendererKind,
}

impl ConverterConfig {
    pub fn new(overline_weight: OverlineWeight, renderer: RendererKind) -> Self {
        Self {
            overline_weight,
            strict_alphabet: false,
            renderer,
        }
    }

    /// Builder method: Set overline weight
    pub fn with_overline_weight(mut self, weight: OverlineWeight) -> Self {
        self.overline_weight = weight;
        self
    }

    /// Builder method: Reject unknown characters in numeral strings
    pub fn with_strict_alphabet(mut self, strict: bool) -> Self {
        self.strict_alphabet = strict;
        self
    }

    /// Builder method: Set display renderer
    pub fn with_renderer(mut self, renderer: RendererKind) -> Self {
        self.renderer = renderer;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumeralResult<()> {
        if let RendererKind::HtmlSpan { style } = &self.renderer {
            if !is_valid_overline_style(style) {
                tracing::warn!(
                    style = %style,
                    "overline span style must be non-empty and free of markup characters"
                );
                return Err(NumeralError::InvalidConfig);
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Thousandfold overlines, lenient input, combining-overline display
    pub fn classical() -> Self {
        Self::default()
    }

    /// Plain-weight overline tally with HTML span display
    /// - Reproduces the behaviour of web renderers that emit span markup and
    ///   read numerals back by counting letters
    pub fn historical() -> Self {
        Self::new(OverlineWeight::BaseWeight, RendererKind::html_span())
    }

    /// Thousandfold overlines with HTML span display
    pub fn web() -> Self {
        Self::new(OverlineWeight::Thousandfold, RendererKind::html_span())
    }
}
