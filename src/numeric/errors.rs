// ============================================================================
// Money Errors
// Error types for exact monetary arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during exact monetary arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Input string or value could not be parsed
    InvalidInput,
    /// Attempted division by a zero scalar or zero denominator
    DivisionByZero,
    /// The (currency, unit) pair is not registered in the scale table
    UnknownUnit,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidInput => write!(f, "invalid input: could not parse value"),
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::UnknownUnit => {
                write!(f, "unknown unit: (currency, unit) pair is not registered")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MoneyError::UnknownUnit.to_string(),
            "unknown unit: (currency, unit) pair is not registered"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::InvalidInput, MoneyError::InvalidInput);
        assert_ne!(MoneyError::InvalidInput, MoneyError::UnknownUnit);
    }
}
