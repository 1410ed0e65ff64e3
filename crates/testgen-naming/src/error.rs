//! Error types for name generation

use thiserror::Error;

/// Input-validation failures raised while deriving names.
///
/// Name generation is otherwise total: any batch of valid items produces a
/// complete assignment. The first invalid item aborts the whole batch and no
/// partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingError {
    #[error("Invalid seed at position {ordinal}: {reason}")]
    InvalidSeed { ordinal: usize, reason: String },

    #[error("Invalid type descriptor '{descriptor}': {reason}")]
    InvalidTypeDescriptor { descriptor: String, reason: String },

    #[error("Invalid naming configuration: {message}")]
    InvalidConfig { message: String },
}

impl NamingError {
    /// Create a new invalid seed error
    pub fn invalid_seed(ordinal: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            ordinal,
            reason: reason.into(),
        }
    }

    /// Create a new invalid type descriptor error
    pub fn invalid_type(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeDescriptor {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type NamingResult<T> = Result<T, NamingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NamingError::invalid_seed(3, "seed is empty");
        assert_eq!(err.to_string(), "Invalid seed at position 3: seed is empty");

        let err = NamingError::invalid_type("List<", "unbalanced '<'");
        assert_eq!(
            err.to_string(),
            "Invalid type descriptor 'List<': unbalanced '<'"
        );
    }
}
