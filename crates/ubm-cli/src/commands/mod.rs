//! Command implementations for the ubm CLI
//!
//! Each command lives in its own submodule and receives the shared
//! [`Context`](crate::context::Context).

mod add;
mod category;
mod completions;
mod config;
mod delete;
mod edit;
mod list;
mod mv;
mod search;
mod show;

pub use add::execute as add_bookmark;
pub use category::execute as manage_categories;
pub use completions::generate;
pub use config::execute as manage_config;
pub use delete::execute as delete_bookmark;
pub use edit::execute as edit_bookmark;
pub use list::execute as browse;
pub use mv::execute as move_bookmark;
pub use search::{SearchOptions, execute as search};
pub use show::execute as show_all;

use anyhow::{Result, anyhow};
use ubm_core::{
    Bookmark, BookmarkAction, MenuItem, NavigationOutcome, Navigator, Prompter, StoreData,
    TitleMatch, path,
};

use crate::context::Context;
use crate::error::CliError;

/// Flat menu row for a bookmark: title, filterable by URL, category as detail.
pub(crate) fn bookmark_item(bookmark: &Bookmark) -> MenuItem {
    MenuItem::new(format!("🔗 {}", bookmark.title))
        .with_search_extra(&bookmark.url)
        .with_detail(format!("{} [{}]", bookmark.url, path::display(&bookmark.category)))
}

/// The entry behind a menu index, or an error when the index is out of range.
pub(crate) fn chosen<T: Clone>(choices: &[T], index: usize) -> Result<T> {
    choices
        .get(index)
        .cloned()
        .ok_or_else(|| anyhow!("selection {index} out of range ({} choices)", choices.len()))
}

/// Find the bookmark a command should act on.
///
/// With a title the lookup is exact first, then a case-insensitive substring
/// match; several candidates are offered in a flat menu. Without a title the
/// user browses the tree. `None` means there was nothing to choose from.
pub(crate) fn locate(
    ctx: &mut Context,
    data: &StoreData,
    title: Option<&str>,
    command: &str,
) -> Result<Option<Bookmark>> {
    let Some(title) = title else {
        ctx.require_terminal(command, Some(&format!("ubm {command} TITLE")))?;
        let root = data.category_tree();
        let label = format!("Select a bookmark to {command}");
        let outcome = Navigator::new(&mut ctx.prompter, &root, &data.bookmarks)
            .with_label(&label)
            .run(BookmarkAction::Select)?;
        return Ok(match outcome {
            NavigationOutcome::Empty => None,
            other => other.into_bookmark(),
        });
    };

    match data.find_by_title(title) {
        TitleMatch::None => Err(CliError::not_found(anyhow!("no bookmark found matching '{title}'")).into()),
        TitleMatch::One(bookmark) => Ok(Some(bookmark.clone())),
        TitleMatch::Many(candidates) => {
            ctx.require_terminal(command, Some(&format!("ubm {command} \"<exact title>\"")))?;
            let items: Vec<MenuItem> = candidates.iter().map(|b| bookmark_item(b)).collect();
            let prompt = format!("Multiple bookmarks match '{title}'");
            let index = ctx.prompter.select(&prompt, &items)?;
            chosen(&candidates, index).map(|b| Some(b.clone()))
        },
    }
}
