//! Naming conventions used by the generators

use crate::error::{NamingError, NamingResult};
use crate::strategy::is_java_identifier;
use serde::{Deserialize, Serialize};

/// Conventions applied when deriving test method names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConfig {
    /// Prefix prepended to the capitalized method name (default: `test`)
    #[serde(default = "default_test_prefix")]
    pub test_prefix: String,
    /// Overloads with at most this many parameters are told apart by their
    /// parameter types; longer ones by their parameter count (default: 2)
    #[serde(default = "default_max_suffix_types")]
    pub max_suffix_types: usize,
    /// First value of the numeric suffix used as the last resort (default: 1)
    #[serde(default = "default_sequence_start")]
    pub sequence_start: u32,
}

fn default_test_prefix() -> String {
    "test".to_string()
}

fn default_max_suffix_types() -> usize {
    2
}

fn default_sequence_start() -> u32 {
    1
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            test_prefix: default_test_prefix(),
            max_suffix_types: default_max_suffix_types(),
            sequence_start: default_sequence_start(),
        }
    }
}

impl NamingConfig {
    /// Validate the conventions
    pub fn validate(&self) -> NamingResult<()> {
        if !is_java_identifier(&self.test_prefix) {
            return Err(NamingError::invalid_config(format!(
                "test prefix '{}' is not a valid identifier",
                self.test_prefix
            )));
        }

        if self.max_suffix_types == 0 {
            return Err(NamingError::invalid_config(
                "maxSuffixTypes must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NamingConfig::default();
        assert_eq!(config.test_prefix, "test");
        assert_eq!(config.max_suffix_types, 2);
        assert_eq!(config.sequence_start, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let config = NamingConfig {
            test_prefix: "1test".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(NamingError::InvalidConfig { .. })
        ));

        let config = NamingConfig {
            test_prefix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_suffix_types_rejected() {
        let config = NamingConfig {
            max_suffix_types: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_camel_case() {
        let config: NamingConfig =
            serde_json::from_str(r#"{"testPrefix": "should", "sequenceStart": 2}"#).unwrap();
        assert_eq!(config.test_prefix, "should");
        assert_eq!(config.max_suffix_types, 2);
        assert_eq!(config.sequence_start, 2);
    }
}
