// ============================================================================
// Numeral Errors
// Error types for numeral conversion and accumulation
// ============================================================================

use std::fmt;

/// Errors that can occur while converting or accumulating numeral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input is neither a recognised numeral string nor a numeric literal
    TypeMismatch,
    /// Value cannot be written as a numeral (one million or more, or negative)
    OutOfRange,
    /// Accumulated quantity exceeded the decimal range
    Overflow,
    /// Converter configuration failed validation
    InvalidConfig,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::TypeMismatch => write!(
                f,
                "type mismatch: expected a roman numeral or a numeric literal"
            ),
            NumeralError::OutOfRange => {
                write!(f, "out of range: value must be between 0 and 999999")
            },
            NumeralError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumeralError::InvalidConfig => write!(f, "invalid converter configuration"),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumeralError::OutOfRange.to_string(),
            "out of range: value must be between 0 and 999999"
        );
        assert_eq!(
            NumeralError::TypeMismatch.to_string(),
            "type mismatch: expected a roman numeral or a numeric literal"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumeralError::TypeMismatch, NumeralError::TypeMismatch);
        assert_ne!(NumeralError::TypeMismatch, NumeralError::OutOfRange);
    }
}
