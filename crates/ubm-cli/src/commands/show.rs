//! Show command implementation - print every bookmark

use anyhow::Result;
use ubm_core::DisplayFormat;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output::{json, text};

/// Print all bookmarks as a tree, a grouped list, or JSON.
///
/// `--flat` wins over the configured `display_format`.
pub fn execute(ctx: &Context, flat: bool, format: OutputFormat) -> Result<()> {
    let data = ctx.storage.load()?;

    if format == OutputFormat::Json {
        let all: Vec<_> = data.bookmarks.iter().collect();
        println!("{}", json::bookmarks(&all)?);
        return Ok(());
    }

    if data.bookmarks.is_empty() {
        println!("No bookmarks found. Add one with `ubm add URL`.");
        return Ok(());
    }

    let flat = flat || ctx.config.display_format == DisplayFormat::Flat;
    if flat {
        println!("{}", text::bookmark_groups(&data.bookmarks));
    } else {
        println!("{}", text::bookmark_tree(&data.category_tree(), &data.bookmarks));
    }
    Ok(())
}
