//! # Core Codec Components
//!
//! Generation, validation and parsing of EasyPay reference numbers.
//!
//! ## Components
//! - **Checksum**: Luhn check digit over the receiver and account fields
//! - **Reference**: `ReferenceCodec`, `ReferenceNumber` and `ParsedReference`
//! - **Display**: grouping of a number into 4-character blocks
//!
//! ## Number Layout
//! ```text
//! [Prefix(1)] [Receiver(4)] [Account(N, zero padded)] [Check(1)]
//! ```
//!
//! The check digit covers receiver and account only, never the prefix.

pub mod checksum;
pub mod display;
pub mod reference;
