//! Configuration, logging and error handling for testgen
//!
//! - [`config`] - `AppConfig` loading from defaults, TOML files and environment
//! - [`logging`] - tracing subscriber initialization
//! - [`error`] - `TestgenError` and machine-readable error codes

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, LogFormat, LoggingConfig};
pub use error::{ApiError, TestgenError, TestgenResult};
