use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const BIN_NAME: &str = "validate_hex_address";

/// Every argument is a candidate address. No flags are recognized, so the
/// built-in help and version flags are disabled and hyphen-leading tokens are
/// taken as values. Arguments are kept as `OsString` so that non-UTF-8 input
/// reaches the validator instead of failing the parse.
#[derive(Parser, Debug)]
#[command(name = "validate_hex_address")]
#[command(about = "Check that each argument is a 0x-prefixed hexadecimal address", long_about = None)]
#[command(override_usage = "validate_hex_address <ADDRESS> [ADDRESS]...")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(
        value_name = "ADDRESS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub addresses: Vec<OsString>,
}

impl Cli {
    /// Build from the raw argument list, program name excluded.
    ///
    /// An escape `--` is put ahead of the candidates, so the parser takes
    /// everything after it verbatim, including a caller's own `--`.
    pub fn try_from_candidates<I, T>(candidates: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from(BIN_NAME), OsString::from("--")]
            .into_iter()
            .chain(candidates.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }
}

/// Usage line rendered from the [`Cli`] definition
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
