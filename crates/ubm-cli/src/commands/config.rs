//! Config command implementation

use std::fmt::Write as _;

use anyhow::Result;
use ubm_core::Config;

use crate::cli::ConfigCommands;
use crate::context::Context;

/// Dispatch `ubm config ...`.
pub fn execute(ctx: &Context, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", render(&ctx.config)?),
        ConfigCommands::Path => {
            let mut out = String::new();
            writeln!(out, "config: {}", ctx.paths.config_dir.join(ubm_core::config::CONFIG_FILENAME).display())?;
            writeln!(out, "data:   {}", ctx.storage.store_path().display())?;
            print!("{out}");
        },
    }
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
