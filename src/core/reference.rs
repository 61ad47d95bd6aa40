//! # Reference Numbers
//!
//! Encoding of customer account references into fixed-width EasyPay numbers,
//! and the reverse: validation and positional parsing.
//!
//! ## Structure
//! ```text
//! 9 2813 000000005072 8
//! | |    |            +-- Luhn check digit over receiver + account
//! | |    +--------------- account reference, left padded with zeros
//! | +-------------------- receiver identifier
//! +---------------------- EasyPay prefix
//! ```
//!
//! Validation and parsing are independent of the deployment's total length:
//! any 7 to 20 digit number with the right prefix and a matching check digit
//! is accepted, so numbers issued by other receivers can be inspected too.

use crate::config::{
    CodecConfig, MAX_REFERENCE_LENGTH, MIN_REFERENCE_LENGTH, RECEIVER_FIELD_WIDTH,
};
use crate::core::checksum::{has_valid_check_digit, luhn_check_digit};
use crate::core::display::format_for_display;
use crate::error::{ReferenceError, Result};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, trace, warn};

/// Encoder, validator and parser bound to one deployment layout.
///
/// The codec holds no mutable state and is `Send + Sync`; share it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCodec {
    config: CodecConfig,
}

impl Default for ReferenceCodec {
    /// Codec for the built-in deployment (`9`, receiver `2813`, 18 digits).
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
        }
    }
}

impl ReferenceCodec {
    /// Builds a codec after checking that `config` describes a usable layout.
    ///
    /// # Errors
    /// Returns `ReferenceError::ConfigError` listing every problem found.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }

    pub fn receiver_id(&self) -> &str {
        &self.config.receiver_id
    }

    pub fn total_length(&self) -> usize {
        self.config.total_length
    }

    /// Maximum number of characters an account reference may have.
    pub fn account_width(&self) -> usize {
        self.config.account_width()
    }

    /// Generates the reference number for `account_reference`.
    ///
    /// The account reference is left padded with zeros to the account width.
    /// Its characters are not checked: anything that is not a decimal digit
    /// is carried into the output unchanged, and such output will not
    /// pass `validate`.
    ///
    /// # Errors
    /// Returns `ReferenceError::LengthExceeded` if `account_reference` is
    /// longer than [`account_width`](Self::account_width).
    #[instrument(level = "debug", skip(self), fields(receiver_id = %self.config.receiver_id))]
    pub fn encode(&self, account_reference: &str) -> Result<ReferenceNumber> {
        let width = self.account_width();
        let length = account_reference.chars().count();

        if length > width {
            warn!(length, width, "Customer ID does not fit the account field");
            return Err(ReferenceError::LengthExceeded { length, width });
        }

        let base = format!(
            "{receiver}{account_reference:0>width$}",
            receiver = self.config.receiver_id
        );
        let check = luhn_check_digit(&base);

        let number = format!("{}{base}{check}", self.config.prefix);
        debug!(%number, "Generated reference number");
        Ok(ReferenceNumber(number))
    }

    /// Returns `true` iff `candidate` is a well-formed reference number.
    ///
    /// Well-formed means: starts with the prefix, contains only decimal
    /// digits, is 7 to 20 digits long, and its last digit is the Luhn check
    /// digit of everything between the prefix and itself.
    pub fn validate(&self, candidate: &str) -> bool {
        match self.rejection_reason(candidate) {
            None => true,
            Some(reason) => {
                trace!(candidate, reason, "Rejected reference number");
                false
            }
        }
    }

    /// Splits a valid reference number into its fields.
    ///
    /// The receiver field is always the 4 digits after the prefix, whatever
    /// this deployment's receiver is. Returns `None` for anything `validate`
    /// rejects.
    pub fn decode<'a>(&self, candidate: &'a str) -> Option<ParsedReference<'a>> {
        if !self.validate(candidate) {
            return None;
        }

        // validated input is ASCII, at least MIN_REFERENCE_LENGTH long
        let len = candidate.len();
        let receiver_end = 1 + RECEIVER_FIELD_WIDTH;
        Some(ParsedReference {
            prefix: &candidate[..1],
            receiver_id: &candidate[1..receiver_end],
            account_number: &candidate[receiver_end..len - 1],
            check_digit: &candidate[len - 1..],
        })
    }

    /// Display form of `reference`, see [`format_for_display`].
    pub fn format(&self, reference: &str) -> String {
        format_for_display(reference)
    }

    fn rejection_reason(&self, candidate: &str) -> Option<&'static str> {
        if !candidate.starts_with(self.config.prefix.as_str()) {
            return Some("missing prefix");
        }
        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return Some("non-digit character");
        }
        if !(MIN_REFERENCE_LENGTH..=MAX_REFERENCE_LENGTH).contains(&candidate.len()) {
            return Some("length out of range");
        }

        // the check digit covers everything after the prefix
        if !has_valid_check_digit(&candidate[1..]) {
            return Some("check digit mismatch");
        }
        None
    }
}

/// A generated reference number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReferenceNumber(String);

impl ReferenceNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number grouped in blocks of four for display.
    pub fn formatted(&self) -> String {
        format_for_display(&self.0)
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReferenceNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ReferenceNumber> for String {
    fn from(number: ReferenceNumber) -> Self {
        number.0
    }
}

impl PartialEq<str> for ReferenceNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ReferenceNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Fields of a validated reference number, borrowed from the parsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedReference<'a> {
    pub prefix: &'a str,
    /// Fixed 4-digit receiver field
    pub receiver_id: &'a str,
    /// Account field exactly as it appears, zero padding included
    pub account_number: &'a str,
    pub check_digit: &'a str,
}

impl<'a> ParsedReference<'a> {
    /// Account field without its zero padding; `"0"` when the field is all zeros.
    pub fn account_reference(&self) -> &'a str {
        let trimmed = self.account_number.trim_start_matches('0');
        match (trimmed.is_empty(), self.account_number.len()) {
            (true, len) if len > 0 => &self.account_number[len - 1..],
            _ => trimmed,
        }
    }

    /// Check digit as a number, `None` if the field is not a single digit.
    pub fn check_digit_value(&self) -> Option<u8> {
        match self.check_digit.as_bytes() {
            [b] if b.is_ascii_digit() => Some(b - b'0'),
            _ => None,
        }
    }
}
