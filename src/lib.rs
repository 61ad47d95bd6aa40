//! # EasyPay Reference Codec
//!
//! Generates, validates and parses EasyPay payment reference numbers.
//!
//! An EasyPay number is a fixed-width decimal string made of the `9` prefix,
//! a 4-digit receiver identifier, the customer's account reference left
//! padded with zeros, and a Luhn check digit:
//!
//! ```text
//! 9 2813 000000005072 8
//! ```
//!
//! All operations are pure and synchronous. A [`ReferenceCodec`] holds only
//! its read-only layout and can be shared across threads.
//!
//! ## Quick Start
//! ```rust
//! use easypay_reference::ReferenceCodec;
//!
//! let codec = ReferenceCodec::default();
//! let number = codec.encode("5072")?;
//! assert_eq!(number, "928130000000050728");
//! assert_eq!(number.formatted(), "9281 3000 0000 0507 28");
//!
//! assert!(codec.validate("928130000000050728"));
//! assert!(!codec.validate("928130000000050729"));
//!
//! let parsed = codec.decode("915001234567890").expect("valid number");
//! assert_eq!(parsed.receiver_id, "1500");
//! assert_eq!(parsed.account_number, "123456789");
//! # Ok::<(), easypay_reference::ReferenceError>(())
//! ```
//!
//! ## Modules
//! - [`core`]: checksum, encoding/parsing, display formatting
//! - [`config`]: deployment layout and logging settings
//! - [`error`]: error type and messages
//! - [`utils`]: logging setup

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::{CodecConfig, EasyPayConfig, LoggingConfig};
pub use crate::core::checksum::luhn_check_digit;
pub use crate::core::display::format_for_display;
pub use crate::core::reference::{ParsedReference, ReferenceCodec, ReferenceNumber};
pub use crate::error::{ReferenceError, Result};

/// Encodes `account_reference` with the built-in deployment layout.
pub fn encode(account_reference: &str) -> Result<ReferenceNumber> {
    ReferenceCodec::default().encode(account_reference)
}

/// Validates `candidate` against the EasyPay number format.
pub fn validate(candidate: &str) -> bool {
    ReferenceCodec::default().validate(candidate)
}

/// Parses `candidate` into its fields, `None` when it is not valid.
pub fn decode(candidate: &str) -> Option<ParsedReference<'_>> {
    ReferenceCodec::default().decode(candidate)
}
