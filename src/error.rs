//! # Error Types
//!
//! Error handling for the reference codec.
//!
//! Only two things can actually go wrong: an account reference that does not
//! fit the configured width, and a deployment configuration that cannot be
//! loaded or does not describe a usable number layout.
//!
//! Malformed or foreign reference numbers are *not* errors. `validate` answers
//! `false` and `decode` answers `None` for them.
//!
//! ## Example Usage
//! ```rust
//! use easypay_reference::error::ReferenceError;
//! use easypay_reference::ReferenceCodec;
//! use tracing::{error, info};
//!
//! let codec = ReferenceCodec::default();
//! match codec.encode("123456789012345") {
//!     Ok(number) => info!(%number, "Generated reference"),
//!     Err(ReferenceError::LengthExceeded { length, width }) => {
//!         error!(length, width, "Customer ID does not fit")
//!     }
//!     Err(e) => error!(error = %e, "Unexpected failure"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Static messages shared by error paths and config validation.
pub mod constants {
    /// Shown to the end user when the customer ID is too wide
    pub const ERR_LENGTH_EXCEEDED: &str =
        "Total character length is too short to accommodate the Customer ID.";

    /// Shown when the customer ID is blank
    pub const ERR_EMPTY_CUSTOMER_ID: &str = "Please enter your Customer ID";

    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
    pub const ERR_CONFIG_INVALID: &str = "Configuration validation failed";
}

// ReferenceError is the error type for every fallible codec operation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceError {
    #[error("{msg} (customer ID has {length} digits, account field holds {width})", msg = constants::ERR_LENGTH_EXCEEDED)]
    LengthExceeded { length: usize, width: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ReferenceError {
    /// Message suitable for showing to whoever typed the input.
    pub fn user_message(&self) -> &str {
        match self {
            ReferenceError::LengthExceeded { .. } => constants::ERR_LENGTH_EXCEEDED,
            ReferenceError::ConfigError(msg) => msg,
        }
    }
}

/// Type alias for Results using ReferenceError
pub type Result<T> = std::result::Result<T, ReferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exceeded_display() {
        let err = ReferenceError::LengthExceeded {
            length: 15,
            width: 13,
        };
        let text = err.to_string();
        assert!(text.starts_with(constants::ERR_LENGTH_EXCEEDED));
        assert!(text.contains("15 digits"));
        assert!(text.contains("holds 13"));
        assert_eq!(err.user_message(), constants::ERR_LENGTH_EXCEEDED);
    }

    #[test]
    fn test_config_error_display() {
        let err = ReferenceError::ConfigError("bad prefix".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad prefix");
        assert_eq!(err.user_message(), "bad prefix");
    }
}
