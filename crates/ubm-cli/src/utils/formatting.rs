//! Formatting utilities

use colored::{ColoredString, Colorize};
use ubm_core::path;

/// Category name as shown in listings.
pub fn category_label(name: &str) -> ColoredString {
    format!("📁 {name}").blue().bold()
}

/// Bookmark title as shown in listings.
pub fn bookmark_label(title: &str) -> ColoredString {
    format!("🔗 {title}").normal()
}

/// Dimmed URL.
pub fn url(url: &str) -> ColoredString {
    url.bright_black()
}

/// Category path, reading "uncategorized" for the empty path.
pub fn category_path(category: &str) -> ColoredString {
    path::display(category).cyan()
}

/// `count` followed by the singular or plural noun.
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Success line prefix.
pub fn ok_mark() -> ColoredString {
    "✓".green()
}
