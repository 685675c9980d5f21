// src/error.rs

use thiserror::Error;

/// Error type for the toolkit's fallible operations.
///
/// Only operations with a genuine mathematical precondition return an error
/// (a negative Fibonacci index, a negative factorial input). Every other
/// boundary case is a defined return value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A mathematical precondition on an input was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = MathError::InvalidArgument("n must be non-negative, got -1".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("invalid argument"));
        assert!(msg.contains("-1"));
    }
}
