use hexaddr_cli::{Cli, init_logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when stderr is piped to `head` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli =
        Cli::try_from_candidates(std::env::args_os().skip(1)).unwrap_or_else(|e| e.exit());
    init_logging();

    let result = run(cli, &mut std::io::stderr().lock());

    match result {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
