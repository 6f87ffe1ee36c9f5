//! ubm CLI entry point.
//!
//! Runs the CLI and maps failures to semantic exit codes. A cancelled prompt
//! is not a failure.

use std::process::ExitCode;

use ubm_cli::error::{exit_code_from_error, is_cancelled};

fn main() -> ExitCode {
    match ubm_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_cancelled(&err) => {
            tracing::debug!("cancelled: {err:#}");
            println!("Cancelled.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
