mod args;

pub use args::{Cli, usage};
pub use hexaddr_core::Status;

use anyhow::Result;
use hexaddr_core::validate_all;
use std::io::Write;

/// Validate the parsed arguments, writing diagnostics to `diagnostics`.
///
/// Only I/O failures on `diagnostics` surface as `Err`; usage and validation
/// failures are reported through the returned [`Status`].
pub fn run<W: Write>(cli: Cli, diagnostics: &mut W) -> Result<Status> {
    tracing::debug!(count = cli.addresses.len(), "validating arguments");

    let report = match validate_all(&cli.addresses) {
        Ok(report) => report,
        // validate_all only fails on an empty argument list
        Err(err) => {
            writeln!(diagnostics, "error: {}", err)?;
            writeln!(diagnostics)?;
            writeln!(diagnostics, "{}", usage().trim_end())?;
            return Ok(err.status());
        }
    };

    for rejection in report.rejected() {
        writeln!(diagnostics, "{}", rejection)?;
    }
    diagnostics.flush()?;

    Ok(report.status())
}

/// Install the stderr log subscriber.
///
/// The level is fixed at WARN; the validator only emits debug events, so the
/// diagnostic stream stays limited to usage and rejection lines.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .without_time()
        .try_init();
}
