//! Search command implementation

use anyhow::Result;
use ubm_core::{Bookmark, MenuItem, Prompter, path};

use super::{bookmark_item, chosen};
use crate::browser::open_or_print;
use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output::{json, text};
use crate::utils::formatting::count_noun;

/// Arguments of `ubm search`.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Terms, joined with single spaces into one query.
    pub query: Vec<String>,
    /// Restrict matches to this category subtree.
    pub category: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Print only; never offer to open a match.
    pub no_open: bool,
}

/// Matches for `query` inside `category` (and below it), in store order.
fn filter<'a>(bookmarks: &'a [Bookmark], query: &str, category: Option<&str>) -> Vec<&'a Bookmark> {
    bookmarks
        .iter()
        .filter(|b| category.is_none_or(|c| path::is_within(&b.category, c)))
        .filter(|b| b.matches(query))
        .collect()
}

/// Search titles, URLs and descriptions, then optionally open a match.
pub fn execute(ctx: &mut Context, options: SearchOptions) -> Result<()> {
    let query = options.query.join(" ");
    let category = options.category.as_deref().map(str::trim);
    if let Some(category) = category {
        path::validate(category)?;
    }

    let data = ctx.storage.load()?;
    let hits = filter(&data.bookmarks, &query, category);
    tracing::debug!("search '{query}' matched {}", hits.len());

    if options.format == OutputFormat::Json {
        println!("{}", json::bookmarks(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No bookmarks found matching '{query}'");
        return Ok(());
    }

    println!("Found {}:", count_noun(hits.len(), "bookmark", "bookmarks"));
    println!("{}", text::bookmark_list(&hits));

    if options.no_open || !ctx.is_interactive() {
        return Ok(());
    }

    println!();
    let items: Vec<MenuItem> = hits.iter().map(|b| bookmark_item(b)).collect();
    let index = ctx.prompter.select("Open a bookmark", &items)?;
    let bookmark = chosen(&hits, index)?;
    open_or_print(&ctx.browser, &bookmark.url);
    Ok(())
}
