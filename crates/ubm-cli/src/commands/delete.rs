//! Delete command implementation

use anyhow::{Result, anyhow};
use ubm_core::{BookmarkAction, NavigationOutcome, Navigator};

use crate::context::Context;
use crate::error::CliError;
use crate::output::text;
use crate::utils::formatting::ok_mark;

/// Delete a bookmark by id, or one picked by browsing the tree.
pub fn execute(ctx: &mut Context, id: Option<&str>, yes: bool) -> Result<()> {
    let data = ctx.storage.load()?;

    let bookmark = if let Some(id) = id {
        data.find_by_id(id)
            .cloned()
            .ok_or_else(|| CliError::not_found(anyhow!("no bookmark with id '{id}'")))?
    } else {
        ctx.require_terminal("delete", Some("ubm delete ID --yes"))?;
        let root = data.category_tree();
        let outcome = Navigator::new(&mut ctx.prompter, &root, &data.bookmarks)
            .with_label("Select a bookmark to delete")
            .run(BookmarkAction::Select)?;
        match outcome {
            NavigationOutcome::Selected(b) | NavigationOutcome::Opened(b) => b,
            NavigationOutcome::Empty => return Ok(()),
        }
    };

    println!("{}", text::bookmark_detail(&bookmark));
    let prompt = format!("Delete '{}'?", bookmark.title);
    if !ctx.confirm(&prompt, yes)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let removed = ctx.storage.delete_bookmark(&bookmark.id)?;
    println!("{} Deleted '{}'", ok_mark(), removed.title);
    Ok(())
}
