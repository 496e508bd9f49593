//! Error types for the conversion routines

/// Result type for conversions that can fail.
///
/// This is a convenience alias that uses [`RecursaError`] as the error type.
pub type Result<T> = std::result::Result<T, RecursaError>;

/// Error type for every fallible operation in the crate.
///
/// Most of the algorithms are total over their inputs and never produce one of
/// these. The Roman numeral routines reject values outside the classical range,
/// the decoder rejects characters that are not numerals, and the magic number
/// finder gives up once its step limit runs out.
///
/// # Error Categories
///
/// - **Range Errors**: values the Roman numeral system cannot represent
/// - **Parse Errors**: malformed numeral strings
/// - **Convergence Errors**: a magic number search that never settles
/// - **Configuration Errors**: unusable separator or step settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecursaError {
    /// Roman numerals have no representation for negative values
    #[error("value {value} is too small for a Roman numeral")]
    RomanTooSmall { value: i64 },

    /// Roman numerals top out at 3999
    #[error("value {value} is too large for a Roman numeral")]
    RomanTooLarge { value: i64 },

    /// A character in the numeral is not one of I, V, X, L, C, D, M
    #[error("invalid Roman numeral {numeral:?}: unexpected character at position {position}")]
    InvalidNumeral { numeral: String, position: usize },

    /// The magic number search ran out of steps
    #[error("no magic number reached from {start} within {steps} steps")]
    NoFixedPoint { start: i64, steps: usize },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl RecursaError {
    /// Create an invalid configuration error with a custom message.
    ///
    /// # Arguments
    /// * `message` - What is wrong with the configuration
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this is one of the two Roman numeral range errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::RomanTooSmall { .. } | Self::RomanTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_errors_are_distinguishable() {
        let small = RecursaError::RomanTooSmall { value: -1 };
        let large = RecursaError::RomanTooLarge { value: 4000 };

        assert_ne!(small, large);
        assert!(small.to_string().contains("too small"));
        assert!(large.to_string().contains("too large"));
        assert!(small.is_out_of_range());
        assert!(large.is_out_of_range());
    }

    #[test]
    fn test_invalid_config_constructor() {
        let err = RecursaError::invalid_config("separator must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: separator must not be empty"
        );
        assert!(!err.is_out_of_range());
    }
}
