// ============================================================================
// Domain Models Module
// Glyphs, numerals and converter configuration
// ============================================================================

pub mod config;
pub mod glyph;
pub mod numeral;

pub use config::{ConverterConfig, OverlineWeight, RendererKind};
pub use glyph::{Glyph, Letter};
pub use numeral::Numeral;
