//! Configuration for the words encoder and the magic number finder

use crate::error::{RecursaError, Result};
use serde::{Deserialize, Serialize};

/// Separator placed between words when none is configured.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Step budget for the magic number search.
pub const DEFAULT_MAX_STEPS: usize = 64;

/// Configuration for spelling numbers out as words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Token placed between consecutive words
    pub separator: String,
}

impl WordsConfig {
    /// Create a configuration with the given separator
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Words separated by single spaces
    pub fn spaced() -> Self {
        Self::new(" ")
    }

    /// Set the separator (builder style)
    pub fn with_separator<S: Into<String>>(self, separator: S) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Reject separators that would run words together
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(RecursaError::invalid_config("separator must not be empty"));
        }
        Ok(())
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

/// Configuration for the magic number search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicConfig {
    /// How each value is spelled before its length is taken
    pub words: WordsConfig,
    /// Intermediate steps allowed before giving up
    pub max_steps: usize,
}

impl MagicConfig {
    /// Set the words configuration (builder style)
    pub fn with_words(self, words: WordsConfig) -> Self {
        Self { words, ..self }
    }

    /// Set the step limit (builder style)
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Validate the nested words configuration and the step limit
    pub fn validate(&self) -> Result<()> {
        self.words.validate()?;
        if self.max_steps == 0 {
            return Err(RecursaError::invalid_config(
                "max_steps must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            words: WordsConfig::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_config_defaults() {
        let config = WordsConfig::default();
        assert_eq!(config.separator, "_");
        assert!(config.validate().is_ok());
        assert_eq!(WordsConfig::spaced().separator, " ");
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = WordsConfig::default().with_separator("");
        assert!(matches!(
            config.validate(),
            Err(RecursaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_magic_config_builder_methods() {
        let config = MagicConfig::default()
            .with_max_steps(8)
            .with_words(WordsConfig::spaced());

        assert_eq!(config.max_steps, 8);
        assert_eq!(config.words.separator, " ");
        assert!(config.validate().is_ok());

        let zero_steps = MagicConfig::default().with_max_steps(0);
        assert!(zero_steps.validate().is_err());
    }

    #[test]
    fn test_config_serializes() {
        let config = MagicConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"words":{"separator":"_"},"max_steps":64}"#);

        let back: MagicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
