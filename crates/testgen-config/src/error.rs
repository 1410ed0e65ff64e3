//! Error handling for the testgen tool

use serde::{Deserialize, Serialize};
use testgen_naming::NamingError;
use thiserror::Error;

/// Error type used outside the naming core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TestgenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl TestgenError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type TestgenResult<T> = Result<T, TestgenError>;

/// Standardized error codes for command output
pub mod error_codes {
    /// Internal error
    pub const E1000_INTERNAL_ERROR: &str = "E1000";
    /// Invalid configuration
    pub const E1001_INVALID_CONFIG: &str = "E1001";
    /// Input could not be read
    pub const E1002_IO_ERROR: &str = "E1002";
    /// Malformed input document
    pub const E1008_INVALID_DATA: &str = "E1008";
    /// Invalid method name in the batch
    pub const E2001_INVALID_SEED: &str = "E2001";
    /// Invalid parameter type descriptor in the batch
    pub const E2002_INVALID_TYPE: &str = "E2002";
}

/// Machine-readable error printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<&TestgenError> for ApiError {
    fn from(err: &TestgenError) -> Self {
        use error_codes::*;

        let code = match err {
            TestgenError::Config { .. } => E1001_INVALID_CONFIG,
            TestgenError::Io(_) => E1002_IO_ERROR,
            TestgenError::Json(_) | TestgenError::InvalidInput { .. } => E1008_INVALID_DATA,
            TestgenError::Naming(NamingError::InvalidSeed { .. }) => E2001_INVALID_SEED,
            TestgenError::Naming(NamingError::InvalidTypeDescriptor { .. }) => E2002_INVALID_TYPE,
            TestgenError::Naming(NamingError::InvalidConfig { .. }) => E1001_INVALID_CONFIG,
            TestgenError::Naming(_) => E1000_INTERNAL_ERROR,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<TestgenError> for ApiError {
    fn from(err: TestgenError) -> Self {
        ApiError::from(&err)
    }
}
