use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Full-string pattern for a hex address.
///
/// Without the `m` flag, `^` and `$` anchor at the bounds of the whole input,
/// so a trailing newline is rejected.
pub const HEX_ADDRESS_PATTERN: &str = r"^0x[0-9a-fA-F]+$";

const PREFIX: &str = "0x";

static HEX_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_ADDRESS_PATTERN).unwrap());

/// Check whether `candidate` is a hex address (`0x` followed by one or more hex digits)
pub fn is_hex_address(candidate: &str) -> bool {
    HEX_ADDRESS_REGEX.is_match(candidate)
}

/// A string known to match [`HEX_ADDRESS_PATTERN`].
///
/// The original text is kept as-is, including digit case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexAddress(String);

impl HexAddress {
    pub fn parse(candidate: &str) -> Result<Self> {
        if is_hex_address(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(Error::InvalidAddress(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digits after the `0x` prefix; never empty
    pub fn digits(&self) -> &str {
        &self.0[PREFIX.len()..]
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for HexAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_hex_address(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAddress(value))
        }
    }
}

impl AsRef<str> for HexAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
