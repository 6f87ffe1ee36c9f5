//! JSON output.

use anyhow::Result;
use serde::Serialize;
use ubm_core::{Bookmark, CategoryNode};

/// Pretty JSON for a list of bookmarks, in the given order.
pub fn bookmarks(bookmarks: &[&Bookmark]) -> Result<String> {
    Ok(serde_json::to_string_pretty(bookmarks)?)
}

#[derive(Serialize)]
struct CategoryEntry<'a> {
    path: &'a str,
    name: &'a str,
    depth: usize,
    bookmark_count: usize,
    total_count: usize,
}

/// Pretty JSON listing every category in tree order with its counts.
///
/// The uncategorized bucket appears with an empty path when it has bookmarks.
pub fn categories(root: &CategoryNode) -> Result<String> {
    let entries: Vec<CategoryEntry<'_>> = root
        .walk()
        .filter(|node| !node.is_root)
        .map(|node| CategoryEntry {
            path: &node.path,
            name: &node.name,
            depth: ubm_core::path::depth(&node.path),
            bookmark_count: node.bookmark_count,
            total_count: node.total_count(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
