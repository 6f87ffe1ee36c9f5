//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands, OutputFormat};

/// Initialize the logging subsystem based on CLI flags.
///
/// `--verbose` enables debug output, `--quiet` limits it to errors, and the
/// default shows warnings. Logs always go to stderr so stdout stays clean for
/// JSON output and shell completions.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = !cli.verbose && emits_machine_output(&cli.command);
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, or when emitting machine output
    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}

fn emits_machine_output(command: &Commands) -> bool {
    match command {
        Commands::Show { format, .. } | Commands::Search { format, .. } => {
            *format == OutputFormat::Json
        },
        Commands::Category {
            command: crate::cli::CategoryCommands::List { format },
        } => *format == OutputFormat::Json,
        Commands::Completions { .. } => true,
        _ => false,
    }
}
