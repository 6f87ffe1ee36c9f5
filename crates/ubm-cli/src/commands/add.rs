//! Add command implementation

use anyhow::{Context as _, Result};
use tracing::debug;
use ubm_core::{Bookmark, CategorySelector, Prompter, path, urls};

use crate::context::Context;
use crate::utils::formatting::{category_path, ok_mark};

fn url_validator(input: &str) -> std::result::Result<(), String> {
    urls::normalize(input).map(|_| ()).map_err(|e| e.to_string())
}

/// Execute the add command.
///
/// Missing pieces are prompted for: the URL as text, the category through the
/// category selector. The title defaults to the URL's domain.
pub fn execute(
    ctx: &mut Context,
    url: Option<String>,
    title: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let raw_url = match url {
        Some(url) => url,
        None => {
            ctx.require_terminal("add", Some("ubm add URL [TITLE] -c CATEGORY"))?;
            ctx.prompter.text("URL", None, Some(url_validator))?
        },
    };
    let url = urls::normalize(&raw_url).with_context(|| format!("rejected URL '{raw_url}'"))?;

    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| urls::domain(&url));

    let category = match category {
        Some(category) => {
            let category = category.trim().to_string();
            path::validate(&category)?;
            category
        },
        None => {
            ctx.require_terminal("add", Some("ubm add URL [TITLE] -c CATEGORY"))?;
            let data = ctx.storage.load()?;
            let root = data.category_tree();
            CategorySelector::new(&mut ctx.prompter, &root).select()?
        },
    };
    debug!("adding {url} as '{title}' under '{category}'");

    let saved = ctx.storage.add_bookmark(Bookmark::new(title, url, category))?;
    println!(
        "{} Added '{}' to {}",
        ok_mark(),
        saved.title,
        category_path(&saved.category)
    );
    Ok(())
}
