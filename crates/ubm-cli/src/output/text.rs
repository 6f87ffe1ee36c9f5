//! Human-readable text output.

use std::collections::HashMap;

use chrono::Local;
use colored::Colorize;
use ubm_core::{Bookmark, CategoryNode};

use crate::utils::formatting::{bookmark_label, category_label, category_path, url};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

enum Row<'a> {
    Bookmark(&'a Bookmark),
    Category(&'a CategoryNode),
}

/// Bookmarks drawn under their category nodes, uncategorized last.
///
/// Inside a category its bookmarks come first, then its subcategories.
pub fn bookmark_tree(root: &CategoryNode, bookmarks: &[Bookmark]) -> String {
    let mut by_category: HashMap<&str, Vec<&Bookmark>> = HashMap::new();
    for bookmark in bookmarks {
        by_category
            .entry(bookmark.category.as_str())
            .or_default()
            .push(bookmark);
    }

    let mut lines = vec!["📚 Bookmarks:".bold().to_string()];
    let top: Vec<Row<'_>> = root.children.iter().map(Row::Category).collect();
    draw(&top, "", &by_category, &mut lines);
    lines.join("\n")
}

fn draw(
    rows: &[Row<'_>],
    prefix: &str,
    by_category: &HashMap<&str, Vec<&Bookmark>>,
    lines: &mut Vec<String>,
) {
    for (i, row) in rows.iter().enumerate() {
        let last = i + 1 == rows.len();
        let connector = if last { LAST } else { BRANCH };
        match row {
            Row::Bookmark(b) => lines.push(format!("{prefix}{connector}{}", bookmark_label(&b.title))),
            Row::Category(node) => {
                lines.push(format!("{prefix}{connector}{}", node_label(node)));
                let mut children: Vec<Row<'_>> = by_category
                    .get(node.path.as_str())
                    .map(|list| list.iter().map(|b| Row::Bookmark(b)).collect())
                    .unwrap_or_default();
                children.extend(node.children.iter().map(Row::Category));
                let nested = format!("{prefix}{}", if last { SPACE } else { PIPE });
                draw(&children, &nested, by_category, lines);
            },
        }
    }
}

fn node_label(node: &CategoryNode) -> String {
    if node.bookmark_count > 0 {
        format!("{} ({})", category_label(&node.name), node.bookmark_count)
    } else {
        category_label(&node.name).to_string()
    }
}

/// Bookmarks grouped by category path, groups and titles sorted.
pub fn bookmark_groups(bookmarks: &[Bookmark]) -> String {
    let mut sorted: Vec<&Bookmark> = bookmarks.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.title.cmp(&b.title)));

    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for b in sorted {
        if current != Some(b.category.as_str()) {
            if current.is_some() {
                lines.push(String::new());
            }
            current = Some(b.category.as_str());
            lines.push(format!("📁 {}:", category_path(&b.category)));
        }
        lines.push(format!("  {} - {}", bookmark_label(&b.title), url(&b.url)));
    }
    lines.join("\n")
}

/// Category hierarchy with direct bookmark counts.
pub fn category_tree(root: &CategoryNode) -> String {
    let mut lines = vec!["📁 Categories:".bold().to_string()];
    let top: Vec<Row<'_>> = root.children.iter().map(Row::Category).collect();
    draw(&top, "", &HashMap::new(), &mut lines);
    lines.join("\n")
}

/// One line per bookmark: title, URL and category.
pub fn bookmark_list(bookmarks: &[&Bookmark]) -> String {
    bookmarks
        .iter()
        .map(|b| {
            format!(
                "{} - {} [{}]",
                bookmark_label(&b.title),
                url(&b.url),
                category_path(&b.category)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line description of a single bookmark.
pub fn bookmark_detail(b: &Bookmark) -> String {
    let mut lines = vec![
        format!("{} {}", "Title:".yellow(), b.title),
        format!("{} {}", "URL:".yellow(), b.url),
        format!("{} {}", "Category:".yellow(), category_path(&b.category)),
    ];
    if let Some(description) = &b.description {
        lines.push(format!("{} {description}", "Description:".yellow()));
    }
    if !b.tags.is_empty() {
        lines.push(format!("{} {}", "Tags:".yellow(), b.tags.join(", ")));
    }
    let added = b.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    lines.push(format!("{} {added}", "Added:".yellow()));
    lines.push(format!("{} {}", "ID:".yellow(), b.id.bright_black()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubm_core::StoreData;

    fn sample() -> StoreData {
        StoreData {
            bookmarks: vec![
                Bookmark::new("Dev Blog", "https://blog.example.com/", "dev"),
                Bookmark::new("Go Docs", "https://go.dev/doc/", "dev/go"),
                Bookmark::new("Inbox", "https://inbox.example.com/", ""),
            ],
            categories: vec!["dev".into(), "dev/go".into(), "empty".into()],
            ..StoreData::default()
        }
    }

    fn plain(s: &str) -> String {
        // Strip ANSI escapes so assertions do not depend on the terminal.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_bookmark_tree_layout() {
        let data = sample();
        let rendered = plain(&bookmark_tree(&data.category_tree(), &data.bookmarks));
        let expected = [
            "📚 Bookmarks:",
            "├── 📁 dev (1)",
            "│   ├── 🔗 Dev Blog",
            "│   └── 📁 go (1)",
            "│       └── 🔗 Go Docs",
            "├── 📁 empty",
            "└── 📁 uncategorized (1)",
            "    └── 🔗 Inbox",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_bookmark_groups_sorted() {
        let data = sample();
        let rendered = plain(&bookmark_groups(&data.bookmarks));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "📁 uncategorized:");
        assert!(lines[1].contains("Inbox"));
        assert_eq!(lines[3], "📁 dev:");
        assert_eq!(lines[6], "📁 dev/go:");
    }

    #[test]
    fn test_category_tree_has_no_bookmarks() {
        let data = sample();
        let rendered = plain(&category_tree(&data.category_tree()));
        assert!(rendered.contains("└── 📁 go (1)"));
        assert!(!rendered.contains("🔗"));
    }

    #[test]
    fn test_bookmark_detail() {
        let mut b = Bookmark::new("Go", "https://go.dev/", "");
        b.set_description("Language home");
        let rendered = plain(&bookmark_detail(&b));
        assert!(rendered.contains("Category: uncategorized"));
        assert!(rendered.contains("Description: Language home"));
    }
}
