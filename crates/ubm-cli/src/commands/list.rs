//! List command implementation - browse the category tree

use anyhow::Result;
use ubm_core::{BookmarkAction, NavigationOutcome, Navigator};

use crate::context::Context;

/// Browse categories and open the chosen bookmark.
pub fn execute(ctx: &mut Context) -> Result<()> {
    ctx.require_terminal("list", Some("ubm show"))?;
    let data = ctx.storage.load()?;
    if data.bookmarks.is_empty() && data.categories.is_empty() {
        println!("No bookmarks found. Add one with `ubm add URL`.");
        return Ok(());
    }

    let root = data.category_tree();
    let outcome = Navigator::new(&mut ctx.prompter, &root, &data.bookmarks)
        .run(BookmarkAction::Open(&ctx.browser))?;
    if let NavigationOutcome::Opened(bookmark) = outcome {
        tracing::info!("opened {}", bookmark.url);
    }
    Ok(())
}
