// ============================================================================
// Numeric Module
// Quantity type and error types shared by every converter
// ============================================================================
//
// This module provides:
// - NumeralQuantity: decimal-backed quantity with twelfths decomposition
// - NumeralError: error kinds surfaced by conversion and accumulation
//
// Design principles:
// - Exact decimal arithmetic, no floating point accumulation
// - All fallible operations return Result (no panics)
// - Fractions are resolved to twelfths only at formatting time

mod errors;
mod quantity;

pub use errors::{NumeralError, NumeralResult};
pub use quantity::NumeralQuantity;
