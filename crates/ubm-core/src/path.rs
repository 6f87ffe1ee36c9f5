//! Category path model.
//!
//! A category path is a `/`-delimited string such as `dev/rust/async`. The
//! empty string is the reserved "uncategorized" sentinel: it is a valid value
//! for a bookmark's category but never a real node in the tree.
//!
//! All functions here are pure and operate on `&str`; paths are stored as
//! plain `String`s in bookmarks and in the registered category list.

use crate::{Error, Result};

/// Hierarchy separator.
pub const SEPARATOR: char = '/';

/// Maximum number of segments in a category path.
pub const MAX_DEPTH: usize = 32;

/// Display label for the empty path.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Iterate over the segments of `path`. Empty for the uncategorized path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Number of segments in `path`.
pub fn depth(path: &str) -> usize {
    segments(path).count()
}

/// Parent of `path`: everything before the last separator.
///
/// Top-level paths and the uncategorized path have the root (`""`) as parent.
///
/// ```rust
/// use ubm_core::path::parent;
///
/// assert_eq!(parent("dev/rust/async"), "dev/rust");
/// assert_eq!(parent("dev"), "");
/// assert_eq!(parent(""), "");
/// ```
pub fn parent(path: &str) -> &str {
    path.rfind(SEPARATOR).map_or("", |idx| &path[..idx])
}

/// Final segment of `path`, or [`UNCATEGORIZED`] for the empty path.
pub fn leaf_name(path: &str) -> &str {
    if path.is_empty() {
        return UNCATEGORIZED;
    }
    path.rfind(SEPARATOR).map_or(path, |idx| &path[idx + 1..])
}

/// Join a parent path and a single segment.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// The strict prefixes of `path` plus `path` itself, shortest first.
///
/// ```rust
/// use ubm_core::path::ancestors;
///
/// assert_eq!(ancestors("a/b/c"), vec!["a", "a/b", "a/b/c"]);
/// assert!(ancestors("").is_empty());
/// ```
pub fn ancestors(path: &str) -> Vec<&str> {
    path.match_indices(SEPARATOR)
        .map(|(idx, _)| &path[..idx])
        .chain((!path.is_empty()).then_some(path))
        .collect()
}

/// Whether `path` equals `ancestor` or lies underneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor.is_empty() {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Validate a full category path.
///
/// The empty path is valid. Any other path must consist of non-empty segments
/// and may not exceed [`MAX_DEPTH`] segments.
pub fn validate(path: &str) -> Result<()> {
    if path.is_empty() {
        return Ok(());
    }
    let mut count = 0usize;
    for segment in path.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(Error::Invalid(format!(
                "category path '{path}' contains an empty segment"
            )));
        }
        if segment.trim() != segment {
            return Err(Error::Invalid(format!(
                "category path '{path}' has a segment with surrounding whitespace"
            )));
        }
        count += 1;
    }
    if count > MAX_DEPTH {
        return Err(Error::Invalid(format!(
            "category path '{path}' is nested {count} levels deep (maximum {MAX_DEPTH})"
        )));
    }
    Ok(())
}

/// Validate a single new category name (one segment).
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Invalid("category name cannot be empty".into()));
    }
    if trimmed.contains(SEPARATOR) {
        return Err(Error::Invalid(format!(
            "category name cannot contain '{SEPARATOR}'"
        )));
    }
    Ok(())
}

/// Human-readable form of a path; the empty path reads as "uncategorized".
pub fn display(path: &str) -> &str {
    if path.is_empty() { UNCATEGORIZED } else { path }
}

/// Breadcrumb used as the navigation prompt label.
pub fn breadcrumb(path: &str) -> String {
    if path.is_empty() {
        "Bookmarks".to_string()
    } else {
        format!("Bookmarks > {}", segments(path).collect::<Vec<_>>().join(" > "))
    }
}
