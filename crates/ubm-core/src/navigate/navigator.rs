use tracing::{debug, warn};

use super::{MenuItem, Opener, Prompter};
use crate::path::{self, UNCATEGORIZED};
use crate::tree::{CategoryNode, find_node, find_parent, find_uncategorized};
use crate::types::Bookmark;
use crate::Result;

const EMPTY_MESSAGE: &str = "No bookmarks or categories found.";

/// What to do with the bookmark the user lands on.
#[derive(Clone, Copy)]
pub enum BookmarkAction<'a> {
    /// Open it in a browser and finish.
    Open(&'a dyn Opener),
    /// Hand it back to the caller.
    Select,
}

/// How a navigation session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The bookmark was passed to the opener.
    Opened(Bookmark),
    /// The bookmark was picked for the caller.
    Selected(Bookmark),
    /// There was nothing to navigate.
    Empty,
}

impl NavigationOutcome {
    /// The bookmark the session ended on, if any.
    #[must_use]
    pub fn into_bookmark(self) -> Option<Bookmark> {
        match self {
            Self::Opened(b) | Self::Selected(b) => Some(b),
            Self::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Position {
    /// A real category; the empty path is the root.
    Category(String),
    /// The synthetic uncategorized leaf.
    Uncategorized,
}

enum Entry<'t> {
    Back,
    Enter(&'t CategoryNode),
    Bookmark(&'t Bookmark),
}

/// Walks the category tree until the user picks a bookmark.
///
/// The cursor starts at the root. Each step shows `Back` (away from the
/// root), the child categories, then the bookmarks filed exactly at the
/// cursor. Uncategorized bookmarks therefore show up both at the root and
/// inside the uncategorized leaf.
pub struct Navigator<'a> {
    prompter: &'a mut dyn Prompter,
    root: &'a CategoryNode,
    bookmarks: &'a [Bookmark],
    label: Option<&'a str>,
}

impl<'a> Navigator<'a> {
    /// Navigate `root`, listing bookmarks from `bookmarks`.
    pub fn new(
        prompter: &'a mut dyn Prompter,
        root: &'a CategoryNode,
        bookmarks: &'a [Bookmark],
    ) -> Self {
        Self {
            prompter,
            root,
            bookmarks,
            label: None,
        }
    }

    /// Prefix shown before the breadcrumb in every prompt.
    #[must_use]
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Run until a bookmark is chosen, the menu is empty, or the user cancels.
    pub fn run(mut self, action: BookmarkAction<'_>) -> Result<NavigationOutcome> {
        let mut position = Position::Category(String::new());
        loop {
            let entries = self.entries(&position);
            if entries.is_empty() {
                self.prompter.notify(EMPTY_MESSAGE);
                return Ok(NavigationOutcome::Empty);
            }

            let items: Vec<MenuItem> = entries.iter().map(menu_item).collect();
            let prompt = self.prompt_label(&position);
            let choice = self.prompter.select(&prompt, &items)?;
            let Some(entry) = entries.get(choice) else {
                warn!("selection index {choice} out of range; staying put");
                continue;
            };

            position = match entry {
                Entry::Back => self.parent_of(&position),
                Entry::Enter(child) if child.is_uncategorized() => Position::Uncategorized,
                Entry::Enter(child) => Position::Category(child.path.clone()),
                Entry::Bookmark(bookmark) => {
                    let bookmark = (*bookmark).clone();
                    return Ok(self.finish(bookmark, action));
                },
            };
            debug!("navigator moved to {position:?}");
        }
    }

    fn entries(&self, position: &Position) -> Vec<Entry<'a>> {
        let root = self.root;
        let (node, category) = match position {
            Position::Category(p) => (find_node(root, p), p.as_str()),
            Position::Uncategorized => (find_uncategorized(root), ""),
        };
        let at_root = matches!(position, Position::Category(p) if p.is_empty());

        let mut entries = Vec::new();
        if !at_root {
            entries.push(Entry::Back);
        }
        if let Some(node) = node {
            entries.extend(node.children.iter().map(Entry::Enter));
        }
        entries.extend(
            self.bookmarks
                .iter()
                .filter(|b| b.category == category)
                .map(Entry::Bookmark),
        );
        entries
    }

    fn parent_of(&self, position: &Position) -> Position {
        match position {
            Position::Uncategorized => Position::Category(String::new()),
            Position::Category(p) => Position::Category(
                find_parent(self.root, p)
                    .map(|parent| parent.path.clone())
                    .unwrap_or_default(),
            ),
        }
    }

    fn prompt_label(&self, position: &Position) -> String {
        let crumb = match position {
            Position::Category(p) => path::breadcrumb(p),
            Position::Uncategorized => format!("{} > {UNCATEGORIZED}", path::breadcrumb("")),
        };
        match self.label {
            Some(label) => format!("{label} - {crumb}"),
            None => crumb,
        }
    }

    fn finish(&mut self, bookmark: Bookmark, action: BookmarkAction<'_>) -> NavigationOutcome {
        match action {
            BookmarkAction::Select => NavigationOutcome::Selected(bookmark),
            BookmarkAction::Open(opener) => {
                if let Err(err) = opener.open(&bookmark.url) {
                    warn!("failed to open {}: {err}", bookmark.url);
                    self.prompter
                        .notify(&format!("Please open manually: {}", bookmark.url));
                }
                NavigationOutcome::Opened(bookmark)
            },
        }
    }
}

fn menu_item(entry: &Entry<'_>) -> MenuItem {
    match entry {
        Entry::Back => MenuItem::new("⬅  Back to parent"),
        Entry::Enter(node) if node.bookmark_count > 0 => {
            MenuItem::new(format!("📁 {} ({})", node.name, node.bookmark_count))
        },
        Entry::Enter(node) => MenuItem::new(format!("📁 {}", node.name)),
        Entry::Bookmark(b) => {
            let item = MenuItem::new(format!("🔗 {}", b.title)).with_search_extra(&b.url);
            let detail = match &b.description {
                Some(description) => format!("{}\n{description}", b.url),
                None => b.url.clone(),
            };
            item.with_detail(detail)
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::navigate::scripted::{Answer, RecordingOpener, ScriptedPrompter};
    use crate::types::StoreData;
    use crate::Error;

    fn store() -> StoreData {
        StoreData {
            bookmarks: vec![
                Bookmark::new("Dev Blog", "https://blog.example.com/", "dev"),
                Bookmark::new("Go Docs", "https://go.dev/doc/", "dev/go"),
                Bookmark::new("Go Play", "https://go.dev/play/", "dev/go"),
                Bookmark::new("Misc", "https://misc.example.com/", ""),
            ],
            categories: vec!["dev".into(), "dev/go".into()],
            ..StoreData::default()
        }
    }

    fn navigate(
        data: &StoreData,
        answers: Vec<Answer>,
        action: BookmarkAction<'_>,
    ) -> (Result<NavigationOutcome>, ScriptedPrompter) {
        let tree = data.category_tree();
        let mut prompter = ScriptedPrompter::new(answers);
        let outcome = Navigator::new(&mut prompter, &tree, &data.bookmarks).run(action);
        (outcome, prompter)
    }

    #[test]
    fn test_empty_store_reports_and_never_prompts() {
        let data = StoreData::default();
        let (outcome, prompter) = navigate(&data, vec![], BookmarkAction::Select);
        assert_eq!(outcome.unwrap(), NavigationOutcome::Empty);
        assert!(prompter.asked.is_empty());
        assert_eq!(prompter.notices, vec![EMPTY_MESSAGE]);
    }

    #[test]
    fn test_root_menu_lists_categories_then_uncategorized_bookmarks() {
        let data = store();
        let (outcome, prompter) = navigate(&data, vec![Answer::Cancel], BookmarkAction::Select);
        assert!(outcome.unwrap_err().is_cancelled());
        let root = &prompter.asked[0];
        assert_eq!(root.prompt, "Bookmarks");
        assert_eq!(
            root.labels,
            vec!["📁 dev (1)", "📁 uncategorized (1)", "🔗 Misc"]
        );
    }

    #[test]
    fn test_uncategorized_bookmark_selectable_from_root() {
        let data = StoreData {
            bookmarks: vec![Bookmark::new("Misc", "https://misc.example.com/", "")],
            categories: vec!["dev".into()],
            ..StoreData::default()
        };
        let (outcome, prompter) =
            navigate(&data, vec![Answer::Pick("Misc")], BookmarkAction::Select);
        assert!(matches!(outcome.unwrap(), NavigationOutcome::Selected(b) if b.title == "Misc"));
        assert_eq!(
            prompter.asked[0].labels,
            vec!["📁 dev", "📁 uncategorized (1)", "🔗 Misc"]
        );
    }

    #[test]
    fn test_drill_down_and_select() {
        let data = store();
        let (outcome, prompter) = navigate(
            &data,
            vec![Answer::Pick("dev"), Answer::Pick("go"), Answer::Pick("Go Play")],
            BookmarkAction::Select,
        );
        let NavigationOutcome::Selected(b) = outcome.unwrap() else {
            panic!("expected a selection");
        };
        assert_eq!(b.title, "Go Play");

        let dev = &prompter.asked[1];
        assert_eq!(dev.prompt, "Bookmarks > dev");
        assert_eq!(dev.labels, vec!["⬅  Back to parent", "📁 go (2)", "🔗 Dev Blog"]);
        assert_eq!(prompter.asked[2].prompt, "Bookmarks > dev > go");
    }

    #[test]
    fn test_back_returns_to_same_menu() {
        let data = store();
        let (outcome, prompter) = navigate(
            &data,
            vec![
                Answer::Pick("dev"),
                Answer::Pick("go"),
                Answer::Pick("Back"),
                Answer::Pick("Back"),
                Answer::Cancel,
            ],
            BookmarkAction::Select,
        );
        assert!(matches!(outcome, Err(Error::Cancelled)));
        assert_eq!(prompter.asked[1].labels, prompter.asked[3].labels);
        assert_eq!(prompter.asked[0].labels, prompter.asked[4].labels);
        assert_eq!(prompter.asked[4].prompt, "Bookmarks");
    }

    #[test]
    fn test_uncategorized_leaf_lists_only_uncategorized() {
        let data = store();
        let (outcome, prompter) = navigate(
            &data,
            vec![Answer::Pick("uncategorized"), Answer::Pick("Back"), Answer::Cancel],
            BookmarkAction::Select,
        );
        assert!(outcome.unwrap_err().is_cancelled());
        let leaf = &prompter.asked[1];
        assert_eq!(leaf.prompt, "Bookmarks > uncategorized");
        assert_eq!(leaf.labels, vec!["⬅  Back to parent", "🔗 Misc"]);
        assert_eq!(prompter.asked[2].prompt, "Bookmarks");
    }

    #[test]
    fn test_open_action_calls_opener() {
        let data = store();
        let opener = RecordingOpener::default();
        let (outcome, prompter) = navigate(
            &data,
            vec![Answer::Pick("uncategorized"), Answer::Pick("Misc")],
            BookmarkAction::Open(&opener),
        );
        assert!(matches!(outcome.unwrap(), NavigationOutcome::Opened(b) if b.title == "Misc"));
        assert_eq!(*opener.opened.borrow(), vec!["https://misc.example.com/"]);
        assert!(prompter.notices.is_empty());
    }

    #[test]
    fn test_open_failure_is_not_fatal() {
        let data = store();
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };
        let (outcome, prompter) = navigate(
            &data,
            vec![Answer::Pick("dev"), Answer::Pick("Dev Blog")],
            BookmarkAction::Open(&opener),
        );
        assert!(matches!(outcome.unwrap(), NavigationOutcome::Opened(_)));
        assert_eq!(
            prompter.notices,
            vec!["Please open manually: https://blog.example.com/"]
        );
    }

    #[test]
    fn test_cancel_mid_drill_propagates_and_stops() {
        let data = store();
        let (outcome, prompter) = navigate(
            &data,
            vec![Answer::Pick("dev"), Answer::Cancel, Answer::Pick("go")],
            BookmarkAction::Select,
        );
        assert!(matches!(outcome, Err(Error::Cancelled)));
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn test_label_prefixes_breadcrumb() {
        let data = store();
        let tree = data.category_tree();
        let mut prompter = ScriptedPrompter::new(vec![Answer::Cancel]);
        let _ = Navigator::new(&mut prompter, &tree, &data.bookmarks)
            .with_label("Select bookmark to delete")
            .run(BookmarkAction::Select);
        assert_eq!(
            prompter.asked[0].prompt,
            "Select bookmark to delete - Bookmarks"
        );
    }

    #[test]
    fn test_orphan_category_is_navigable() {
        let mut data = store();
        data.bookmarks
            .push(Bookmark::new("Lost", "https://lost.example.com/", "archive/old"));
        let (outcome, _) = navigate(
            &data,
            vec![Answer::Pick("archive"), Answer::Pick("old"), Answer::Pick("Lost")],
            BookmarkAction::Select,
        );
        assert!(matches!(outcome.unwrap(), NavigationOutcome::Selected(b) if b.title == "Lost"));
    }

    #[test]
    fn test_search_text_includes_url() {
        let b = Bookmark::new("Docs", "https://docs.rs/", "x");
        let item = menu_item(&Entry::Bookmark(&b));
        assert!(crate::search::matches(&item.search_text, "docs.rs"));
        assert_eq!(item.detail.as_deref(), Some("https://docs.rs/"));
    }
}
