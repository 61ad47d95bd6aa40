//! # Configuration Management
//!
//! Deployment configuration for the reference codec.
//!
//! A deployment is fully described by three values: the one-digit EasyPay
//! prefix, the receiver identifier assigned to the biller, and the total
//! number of digits every generated reference carries. Everything else
//! (account field width, check digit position) is derived from those.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`
//!
//! ## Wire Format Limits
//! - Reference numbers are 7 to 20 digits long
//! - The receiver field is always 4 digits wide when parsing

use crate::error::{constants, ReferenceError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Leading digit shared by every EasyPay number
pub const EASYPAY_PREFIX: &str = "9";

/// Receiver identifier of this deployment
pub const RECEIVER_ID: &str = "2813";

/// Digit count of a generated reference number
pub const TOTAL_LENGTH: usize = 18;

/// Width of the receiver field as sliced by `decode`
pub const RECEIVER_FIELD_WIDTH: usize = 4;

/// Shortest reference number accepted by `validate`
pub const MIN_REFERENCE_LENGTH: usize = 7;

/// Longest reference number accepted by `validate`
pub const MAX_REFERENCE_LENGTH: usize = 20;

/// Characters per group in the display form
pub const DISPLAY_GROUP_SIZE: usize = 4;

/// Top-level configuration containing all configurable settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct EasyPayConfig {
    /// Number layout of this deployment
    #[serde(default)]
    pub codec: CodecConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EasyPayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| {
            ReferenceError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_OPEN))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            ReferenceError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_READ))
        })?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| {
            ReferenceError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
        })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(prefix) = std::env::var("EASYPAY_PREFIX") {
            config.codec.prefix = prefix;
        }

        if let Ok(receiver_id) = std::env::var("EASYPAY_RECEIVER_ID") {
            config.codec.receiver_id = receiver_id;
        }

        if let Ok(total_length) = std::env::var("EASYPAY_TOTAL_LENGTH") {
            config.codec.total_length = total_length.parse::<usize>().map_err(|e| {
                ReferenceError::ConfigError(format!(
                    "Invalid EASYPAY_TOTAL_LENGTH '{total_length}': {e}"
                ))
            })?;
        }

        if let Ok(level) = std::env::var("EASYPAY_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                ReferenceError::ConfigError(format!("Invalid EASYPAY_LOG_LEVEL '{level}'"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            ReferenceError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_SERIALIZE))
        })?;

        std::fs::write(path, content).map_err(|e| {
            ReferenceError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_WRITE))
        })?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.codec.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        strict(self.validate())
    }
}

/// Number layout of one deployment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Leading digit of every reference number
    pub prefix: String,

    /// Biller code placed right after the prefix
    pub receiver_id: String,

    /// Digits in a generated reference, check digit included
    pub total_length: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            prefix: String::from(EASYPAY_PREFIX),
            receiver_id: String::from(RECEIVER_ID),
            total_length: TOTAL_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Digits left for the account reference once prefix, receiver and check digit are placed.
    ///
    /// Saturates at zero for layouts that `validate` would reject.
    pub fn account_width(&self) -> usize {
        self.total_length
            .saturating_sub(self.prefix.len())
            .saturating_sub(self.receiver_id.len())
            .saturating_sub(1)
    }

    /// Validate the number layout
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.prefix.len() != 1 || !is_decimal(&self.prefix) {
            errors.push(format!(
                "Prefix must be a single decimal digit, got '{}'",
                self.prefix
            ));
        }

        if self.receiver_id.is_empty() {
            errors.push("Receiver ID cannot be empty".to_string());
        } else if !is_decimal(&self.receiver_id) {
            errors.push(format!(
                "Receiver ID must contain only decimal digits, got '{}'",
                self.receiver_id
            ));
        } else if self.receiver_id.len() != RECEIVER_FIELD_WIDTH {
            // decode always slices a 4-digit receiver field
            errors.push(format!(
                "Receiver ID must be exactly {RECEIVER_FIELD_WIDTH} digits, got {}",
                self.receiver_id.len()
            ));
        }

        if self.total_length <= self.prefix.len() + self.receiver_id.len() + 1 {
            errors.push(format!(
                "Total length {} leaves no room for an account digit (minimum: {})",
                self.total_length,
                self.prefix.len() + self.receiver_id.len() + 2
            ));
        }

        if !(MIN_REFERENCE_LENGTH..=MAX_REFERENCE_LENGTH).contains(&self.total_length) {
            errors.push(format!(
                "Total length {} outside the valid range {MIN_REFERENCE_LENGTH}-{MAX_REFERENCE_LENGTH}",
                self.total_length
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        strict(self.validate())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("easypay"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

fn is_decimal(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn strict(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ReferenceError::ConfigError(format!(
            "{}:\n  - {}",
            constants::ERR_CONFIG_INVALID,
            errors.join("\n  - ")
        )))
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_account_width() {
        assert_eq!(CodecConfig::default().account_width(), 12);
    }

    #[test]
    fn test_account_width_saturates() {
        let config = CodecConfig {
            total_length: 3,
            ..CodecConfig::default()
        };
        assert_eq!(config.account_width(), 0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EasyPayConfig::default_with_overrides(|c| {
            c.codec.receiver_id = "1500".to_string();
            c.logging.log_level = Level::DEBUG;
        });
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed = EasyPayConfig::from_toml(&text).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed = EasyPayConfig::from_toml("").expect("empty TOML is valid");
        assert_eq!(parsed, EasyPayConfig::default());
    }
}
