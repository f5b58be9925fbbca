//! Syntactic validation of `0x`-prefixed hexadecimal addresses.
//!
//! A candidate is valid when it is exactly the literal prefix `0x` followed by
//! one or more digits from `[0-9a-fA-F]`. The prefix is case-sensitive (`0X` is
//! rejected); the digits are not. No numeric value is ever derived.

pub mod address;
pub mod error;
pub mod validate;

pub use address::{HEX_ADDRESS_PATTERN, HexAddress, is_hex_address};
pub use error::{Error, Result};
pub use validate::{Rejection, Report, Status, validate_all};
