//! Configuration management for testgen

use crate::error::{TestgenError, TestgenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use testgen_naming::NamingConfig;

/// Config files looked up in the working directory, first match wins
const CONFIG_FILES: &[&str] = &["testgen.toml", ".testgen/config.toml"];

/// Prefix of environment variable overrides, e.g. `TESTGEN__NAMING__TESTPREFIX`
const ENV_PREFIX: &str = "TESTGEN__";

/// Nested keys spelled in camelCase; env var names can't carry the case
const CAMEL_CASE_KEYS: &[&str] = &[
    "naming.testPrefix",
    "naming.maxSuffixTypes",
    "naming.sequenceStart",
];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Naming conventions for generated tests
    #[serde(default)]
    pub naming: NamingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration relative to the current directory
    pub fn load() -> TestgenResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    /// Load configuration from `dir`
    ///
    /// Configuration is loaded in the following priority order (highest to lowest):
    /// 1. Environment variables (TESTGEN__*)
    /// 2. `testgen.toml` or `.testgen/config.toml` in `dir`
    /// 3. Default values
    pub fn load_from(dir: &Path) -> TestgenResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        for file in CONFIG_FILES {
            let path = dir.join(file);
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading TOML configuration");
                figment = figment.merge(Toml::file(&path));
                break; // Use first found TOML file
            }
        }

        let figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .lowercase(false)
                .map(|key| env_key(key.as_str()).into()),
        );

        let config: AppConfig = figment
            .extract()
            .map_err(|e| TestgenError::config(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;

        tracing::debug!(
            test_prefix = %config.naming.test_prefix,
            max_suffix_types = config.naming.max_suffix_types,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> TestgenResult<()> {
        self.naming
            .validate()
            .map_err(|e| TestgenError::config(e.to_string()))?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(TestgenError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }
}

/// `NAMING__TESTPREFIX` → `naming.testPrefix`
fn env_key(raw: &str) -> String {
    camel_case_key(&raw.to_ascii_lowercase().replace("__", "."))
}

fn camel_case_key(key: &str) -> String {
    CAMEL_CASE_KEYS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(key))
        .map(|known| known.to_string())
        .unwrap_or_else(|| key.to_string())
}
