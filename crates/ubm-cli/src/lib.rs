//! ubm CLI - interactive command-line URL bookmark manager
//!
//! This is the library half of the `ubm` binary. Parsing, logging setup and
//! command dispatch live here so `main.rs` only has to map the outcome to an
//! exit status. Each command is implemented in its own module under
//! `commands`.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod browser;
mod cli;
mod commands;
mod context;
pub mod error;
mod output;
mod prompt;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::SearchOptions;
use crate::context::Context;
use crate::utils::logging::initialize_logging;

/// Execute the ubm CLI with the current arguments and environment.
///
/// # Errors
///
/// Returns an error if initialization or the command fails, including
/// [`ubm_core::Error::Cancelled`] when the user backs out of a prompt.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    if let Commands::Completions { shell } = &cli.command {
        return commands::generate(*shell);
    }

    let mut ctx = Context::from_cli(&cli)?;
    debug!("running {:?}", cli.command);
    execute_command(&mut ctx, cli.command)
}

fn execute_command(ctx: &mut Context, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            url,
            title_arg,
            title,
            category,
        } => commands::add_bookmark(ctx, url, title.or(title_arg), category),
        Commands::List => commands::browse(ctx),
        Commands::Show { flat, format } => commands::show_all(ctx, flat, format),
        Commands::Search {
            query,
            category,
            format,
            no_open,
        } => commands::search(
            ctx,
            SearchOptions {
                query,
                category,
                format,
                no_open,
            },
        ),
        Commands::Edit { title } => commands::edit_bookmark(ctx, title.as_deref()),
        Commands::Move(args) => commands::move_bookmark(ctx, &args),
        Commands::Delete { id, yes } => commands::delete_bookmark(ctx, id.as_deref(), yes),
        Commands::Category { command } => commands::manage_categories(ctx, &command),
        Commands::Config { command } => commands::manage_config(ctx, command),
        Commands::Completions { shell } => commands::generate(shell),
    }
}
