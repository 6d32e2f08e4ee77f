//! Engine configuration.
//!
//! Loaded once by the presentation layer (see `geox-infrastructure`) and
//! injected into the engine at construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::ModelType;
use crate::error::{GeoxError, Result};
use crate::locale::Language;

/// Upper bound for the simulated reply latency.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Runtime settings for a conversation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Simulated "thinking" delay before a reply is appended.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Display language for suggested questions and labels.
    #[serde(default)]
    pub language: Language,
    /// Model type a new session starts with.
    #[serde(default)]
    pub default_model: ModelType,
    /// Characters shown before a long message is collapsed.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_preview_chars() -> usize {
    150
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            language: Language::default(),
            default_model: ModelType::default(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl EngineConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(GeoxError::config(format!(
                "reply_delay_ms must be at most {MAX_REPLY_DELAY_MS}, got {}",
                self.reply_delay_ms
            )));
        }
        if self.preview_chars == 0 {
            return Err(GeoxError::config("preview_chars must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.language, Language::En);
        assert_eq!(config.default_model, ModelType::Land);
        assert_eq!(config.preview_chars, 150);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml("language = \"gu\"\ndefault_model = \"soil\"\n").unwrap();
        assert_eq!(config.language, Language::Gu);
        assert_eq!(config.default_model, ModelType::Soil);
        assert_eq!(config.reply_delay_ms, 1500);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = EngineConfig::from_toml("language = \"fr\"").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_validate_ranges() {
        let err = EngineConfig::from_toml("reply_delay_ms = 90000").unwrap_err();
        assert!(err.is_config());

        let config = EngineConfig {
            preview_chars: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            reply_delay_ms: 250,
            language: Language::Hi,
            default_model: ModelType::Crop,
            preview_chars: 80,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(EngineConfig::from_toml(&text).unwrap(), config);
    }
}
