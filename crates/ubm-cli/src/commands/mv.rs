//! Move command implementation - refile a bookmark

use anyhow::Result;
use ubm_core::{CategorySelector, path};

use super::locate;
use crate::cli::MoveArgs;
use crate::context::Context;
use crate::utils::formatting::{category_path, ok_mark};

/// Move a bookmark to another category.
///
/// The destination comes from `--to`, `--uncategorize`, or the category
/// selector opened at the bookmark's current category.
pub fn execute(ctx: &mut Context, args: &MoveArgs) -> Result<()> {
    let data = ctx.storage.load()?;
    let Some(mut bookmark) = locate(ctx, &data, args.title.as_deref(), "move")? else {
        return Ok(());
    };

    let destination = if args.uncategorize {
        String::new()
    } else if let Some(to) = &args.to {
        let to = to.trim().to_string();
        path::validate(&to)?;
        to
    } else {
        ctx.require_terminal("move", Some("ubm move TITLE --to CATEGORY"))?;
        let root = data.category_tree();
        CategorySelector::new(&mut ctx.prompter, &root)
            .starting_at(&bookmark.category)
            .select()?
    };

    if destination == bookmark.category {
        println!(
            "'{}' is already in {}; nothing to move.",
            bookmark.title,
            category_path(&destination)
        );
        return Ok(());
    }

    let prompt = format!(
        "Move '{}' from {} to {}?",
        bookmark.title,
        path::display(&bookmark.category),
        path::display(&destination)
    );
    if !ctx.confirm(&prompt, args.yes)? {
        println!("Move cancelled.");
        return Ok(());
    }

    bookmark.set_category(destination);
    ctx.storage.update_bookmark(&bookmark)?;
    println!(
        "{} Moved '{}' to {}",
        ok_mark(),
        bookmark.title,
        category_path(&bookmark.category)
    );
    Ok(())
}
