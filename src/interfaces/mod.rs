// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod renderer;

pub use renderer::{CombiningOverlineRenderer, HtmlSpanRenderer, MacronRenderer, OverlineRenderer};
