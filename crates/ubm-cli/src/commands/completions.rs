//! Shell completion scripts

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write the completion script for `shell` to `out`.
pub fn write_to(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

/// Print the completion script for `shell` on stdout.
pub fn generate(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_to(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
