use crate::address::is_hex_address;
use crate::{Error, Result};
use std::ffi::OsStr;
use std::fmt;

/// Overall outcome of a run, as a process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate is a hex address
    Valid,
    /// At least one candidate was rejected
    Invalid,
    /// No candidates were supplied
    Usage,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Valid => 0,
            Status::Invalid => 1,
            Status::Usage => 2,
        }
    }
}

/// A candidate that failed validation, with its 0-based position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub position: usize,
    pub input: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex address: {}", self.input)
    }
}

/// Result of checking a non-empty list of candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    checked: usize,
    rejected: Vec<Rejection>,
}

impl Report {
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Rejections in input order
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn is_success(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn status(&self) -> Status {
        if self.is_success() {
            Status::Valid
        } else {
            Status::Invalid
        }
    }
}

/// Check every candidate in order.
///
/// All candidates are evaluated; an early rejection does not stop the pass.
/// Candidates that are not valid UTF-8 are rejected, and their rejection
/// carries a lossy rendering of the input.
///
/// The only error is [`Error::MissingAddresses`], returned when `candidates`
/// is empty.
pub fn validate_all<I, S>(candidates: I) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut report = Report::default();

    for (position, candidate) in candidates.into_iter().enumerate() {
        let candidate = candidate.as_ref();
        report.checked += 1;

        if candidate.to_str().is_some_and(is_hex_address) {
            continue;
        }

        let input = candidate.to_string_lossy().into_owned();
        tracing::debug!(position, input = %input, "rejected candidate");
        report.rejected.push(Rejection { position, input });
    }

    if report.checked == 0 {
        return Err(Error::MissingAddresses);
    }

    tracing::debug!(
        checked = report.checked,
        rejected = report.rejected.len(),
        "validation finished"
    );

    Ok(report)
}
