use crate::validate::Status;
use std::fmt;

/// Result type for hexaddr-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No candidates were supplied at all (usage error)
    MissingAddresses,

    /// A candidate does not match the hex address pattern
    InvalidAddress(String),
}

impl Error {
    /// Process status this error maps to
    pub fn status(&self) -> Status {
        match self {
            Error::MissingAddresses => Status::Usage,
            Error::InvalidAddress(_) => Status::Invalid,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingAddresses => write!(f, "no addresses supplied"),
            Error::InvalidAddress(input) => write!(f, "invalid hex address: {}", input),
        }
    }
}

impl std::error::Error for Error {}
