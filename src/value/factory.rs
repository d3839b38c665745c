// ============================================================================
// Numeral Value Factory
// Creates numeral values with the configured renderer
// ============================================================================

use super::roman_numeral::RomanNumeralValue;
use crate::domain::config::{ConverterConfig, OverlineWeight, RendererKind};
use crate::interfaces::{
    CombiningOverlineRenderer, HtmlSpanRenderer, MacronRenderer, OverlineRenderer,
};
use crate::numeric::NumeralResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeral value from configuration
///
/// # Arguments
/// * `config` - Converter configuration
///
/// # Returns
/// * `NumeralResult<RomanNumeralValue>` - Empty numeral value or `InvalidConfig`
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
///
/// let mut value = create_from_config(ConverterConfig::web()).unwrap();
/// value.set_value(4000).unwrap();
/// assert_eq!(
///     value.value_as_roman().unwrap(),
///     "M<span style=\"text-decoration: overline\">V</span>"
/// );
/// ```
pub fn create_from_config(config: ConverterConfig) -> NumeralResult<RomanNumeralValue> {
    config.validate()?;

    let renderer = create_renderer(&config.renderer)?;
    tracing::debug!(
        renderer = renderer.name(),
        overline_weight = ?config.overline_weight,
        "creating numeral value"
    );

    Ok(RomanNumeralValue::with_parts(config, renderer))
}

/// Creates the renderer named by the configuration
///
/// # Errors
/// Returns `InvalidConfig` for an HTML span style that cannot be read back.
pub fn create_renderer(kind: &RendererKind) -> NumeralResult<Box<dyn OverlineRenderer>> {
    let renderer: Box<dyn OverlineRenderer> = match kind {
        RendererKind::CombiningOverline => Box::new(CombiningOverlineRenderer),
        RendererKind::Macron => Box::new(MacronRenderer),
        RendererKind::HtmlSpan { style } => Box::new(HtmlSpanRenderer::with_style(style)?),
    };
    Ok(renderer)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating numeral values with fluent API
///
/// # Example
/// ```
/// use roman_numeral::prelude::*;
///
/// let value = RomanNumeralBuilder::new()
///     .macron_rendering()
///     .strict_alphabet()
///     .build()
///     .unwrap();
/// assert_eq!(value.renderer_name(), "macron");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RomanNumeralBuilder {
    config: ConverterConfig,
}

impl RomanNumeralBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Count overlined letters a thousandfold when reading numerals
    pub fn thousandfold_overlines(mut self) -> Self {
        self.config.overline_weight = OverlineWeight::Thousandfold;
        self
    }

    /// Count overlined letters at their plain weight when reading numerals
    pub fn base_weight_overlines(mut self) -> Self {
        self.config.overline_weight = OverlineWeight::BaseWeight;
        self
    }

    /// Reject numeral strings containing unknown characters
    pub fn strict_alphabet(mut self) -> Self {
        self.config.strict_alphabet = true;
        self
    }

    /// Use combining-overline rendering
    pub fn combining_rendering(mut self) -> Self {
        self.config.renderer = RendererKind::CombiningOverline;
        self
    }

    /// Use spacing-macron rendering
    pub fn macron_rendering(mut self) -> Self {
        self.config.renderer = RendererKind::Macron;
        self
    }

    /// Use HTML span rendering with the standard overline style
    pub fn html_rendering(mut self) -> Self {
        self.config.renderer = RendererKind::html_span();
        self
    }

    /// Use HTML span rendering with a custom style
    pub fn html_rendering_with_style(mut self, style: impl Into<String>) -> Self {
        self.config.renderer = RendererKind::HtmlSpan {
            style: style.into(),
        };
        self
    }

    /// Build the numeral value
    pub fn build(self) -> NumeralResult<RomanNumeralValue> {
        create_from_config(self.config)
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumeralError;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_from_config() {
        let value = create_from_config(ConverterConfig::classical()).unwrap();
        assert_eq!(value.renderer_name(), "combining-overline");
    }

    #[test]
    fn test_create_from_invalid_config() {
        let config = ConverterConfig::default().with_renderer(RendererKind::HtmlSpan {
            style: String::new(),
        });
        assert_eq!(
            create_from_config(config).unwrap_err(),
            NumeralError::InvalidConfig
        );
    }

    #[test]
    fn test_create_renderer() {
        assert_eq!(create_renderer(&RendererKind::Macron).unwrap().name(), "macron");
        assert_eq!(
            create_renderer(&RendererKind::html_span()).unwrap().name(),
            "html-span"
        );
        assert_eq!(
            create_renderer(&RendererKind::HtmlSpan {
                style: "a>b".to_string()
            })
            .err(),
            Some(NumeralError::InvalidConfig)
        );
    }

    #[test]
    fn test_builder_html() {
        let mut value = RomanNumeralBuilder::new().html_rendering().build().unwrap();
        value.set_value(98765).unwrap();
        assert_eq!(
            value.value_as_roman().unwrap(),
            "<span style=\"text-decoration: overline\">XCV</span>MMMDCCLXV"
        );
    }

    #[test]
    fn test_builder_base_weight() {
        let mut value = RomanNumeralBuilder::new()
            .base_weight_overlines()
            .html_rendering()
            .build()
            .unwrap();

        value.set_value(9876).unwrap();
        let rendered = value.value_as_roman().unwrap();

        // reading the rendered numeral back counts the overlined X as 10
        value.set_value(rendered.as_str()).unwrap();
        assert_eq!(value.value_as_arabic(), Decimal::from(1886));
    }

    #[test]
    fn test_builder_strict_alphabet() {
        let mut value = RomanNumeralBuilder::new().strict_alphabet().build().unwrap();
        assert_eq!(value.set_value("XIV!"), Err(NumeralError::TypeMismatch));
        assert!(value.set_value("XIV").is_ok());
    }

    #[test]
    fn test_builder_strict_alphabet_rejects_markup() {
        let mut value = RomanNumeralBuilder::new()
            .strict_alphabet()
            .html_rendering()
            .build()
            .unwrap();
        value.set_value(7).unwrap();

        assert_eq!(
            value.set_value("<span onclick=x>X</span>"),
            Err(NumeralError::TypeMismatch)
        );
        assert_eq!(value.set_value("X¯¯"), Err(NumeralError::TypeMismatch));
        assert_eq!(value.value_as_arabic(), Decimal::from(7));

        // the renderer's own output stays readable
        value.set_value(98765).unwrap();
        let rendered = value.value_as_roman().unwrap();
        value.set_value(rendered.as_str()).unwrap();
        assert_eq!(value.value_as_arabic(), Decimal::from(98765));
    }

    #[test]
    fn test_builder_overrides_preset() {
        let builder = RomanNumeralBuilder::from_config(ConverterConfig::historical())
            .thousandfold_overlines()
            .combining_rendering();

        assert_eq!(builder.config().overline_weight, OverlineWeight::Thousandfold);
        assert_eq!(builder.config().renderer, RendererKind::CombiningOverline);
        assert_eq!(builder.build().unwrap().renderer_name(), "combining-overline");
    }

    #[test]
    fn test_builder_invalid_style() {
        let result = RomanNumeralBuilder::new()
            .html_rendering_with_style("\"><script>")
            .build();
        assert_eq!(result.unwrap_err(), NumeralError::InvalidConfig);
    }
}
