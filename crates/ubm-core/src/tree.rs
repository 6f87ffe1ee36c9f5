//! Category tree: builder and locator.
//!
//! The tree is a projection of two flat inputs, the registered category paths
//! and a map from category path to the number of bookmarks filed exactly
//! there. It is rebuilt for every command and never persisted.
//!
//! ```rust
//! use std::collections::HashMap;
//! use ubm_core::tree::{build_tree, find_node, find_parent};
//!
//! let counts = HashMap::from([
//!     ("dev".to_string(), 1),
//!     ("dev/go".to_string(), 2),
//!     (String::new(), 1),
//! ]);
//! let root = build_tree(["dev", "dev/go"], &counts);
//!
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.children[0].name, "dev");
//! assert_eq!(root.children[1].name, "uncategorized");
//!
//! let go = find_node(&root, "dev/go").unwrap();
//! assert_eq!(go.bookmark_count, 2);
//! assert_eq!(find_parent(&root, "dev/go").unwrap().path, "dev");
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::path::{self, UNCATEGORIZED};

/// One level of the category hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    /// Final path segment; empty only for the root.
    pub name: String,
    /// Full path from the root; empty for the root and the uncategorized leaf.
    pub path: String,
    /// Child categories in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
    /// Bookmarks filed exactly at this path (descendants not included).
    pub bookmark_count: usize,
    /// True only for the synthetic top-level node.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_root: bool,
}

impl CategoryNode {
    /// Create the synthetic root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            children: Vec::new(),
            bookmark_count: 0,
            is_root: true,
        }
    }

    fn category(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            children: Vec::new(),
            bookmark_count: 0,
            is_root: false,
        }
    }

    fn uncategorized(count: usize) -> Self {
        Self {
            name: UNCATEGORIZED.to_string(),
            path: String::new(),
            children: Vec::new(),
            bookmark_count: count,
            is_root: false,
        }
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this is the synthetic uncategorized bucket.
    #[must_use]
    pub fn is_uncategorized(&self) -> bool {
        !self.is_root && self.path.is_empty()
    }

    /// Bookmarks at this node and every descendant.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bookmark_count
            + self
                .children
                .iter()
                .map(Self::total_count)
                .sum::<usize>()
    }

    /// Direct child with the given segment name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Every real category path in pre-order (root and uncategorized excluded).
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.walk()
            .filter(|node| !node.path.is_empty())
            .map(|node| node.path.as_str())
            .collect()
    }

    fn sort_children(&mut self) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in &mut self.children {
            child.sort_children();
        }
    }
}

/// Pre-order traversal returned by [`CategoryNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a CategoryNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a CategoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Build the category tree.
///
/// `categories` may arrive in any order and may contain duplicates. Every path
/// yields one node per segment; a path that is a prefix of another shares the
/// same node. Only the node for an exact input path takes its count from
/// `counts`; intermediate nodes default to zero. When `counts[""]` is positive
/// an `uncategorized` leaf is appended after the sorted top-level categories.
///
/// Paths are not validated here. Empty segments are skipped.
pub fn build_tree<I, S>(categories: I, counts: &HashMap<String, usize>) -> CategoryNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<S> = categories.into_iter().collect();
    sorted.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    let mut root = CategoryNode::root();
    for category in &sorted {
        let category = category.as_ref();
        if category.is_empty() {
            continue;
        }
        insert(&mut root, category, counts.get(category).copied().unwrap_or(0));
    }
    root.sort_children();

    if let Some(&count) = counts.get("") {
        if count > 0 {
            root.children.push(CategoryNode::uncategorized(count));
        }
    }

    root
}

fn insert(root: &mut CategoryNode, category: &str, count: usize) {
    let segments: Vec<&str> = path::segments(category).collect();
    let Some(last) = segments.len().checked_sub(1) else {
        return;
    };

    let mut current = root;
    let mut accumulated = String::with_capacity(category.len());
    for (i, segment) in segments.iter().enumerate() {
        if !accumulated.is_empty() {
            accumulated.push(path::SEPARATOR);
        }
        accumulated.push_str(segment);

        let idx = if let Some(idx) = current.children.iter().position(|c| c.name == *segment) {
            idx
        } else {
            current
                .children
                .push(CategoryNode::category(segment, &accumulated));
            current.children.len() - 1
        };
        current = &mut current.children[idx];
        if i == last {
            current.bookmark_count = count;
        }
    }
}

/// Find a node by exact path.
///
/// The empty path resolves to the root. Use [`find_uncategorized`] for the
/// uncategorized leaf.
pub fn find_node<'a>(root: &'a CategoryNode, path: &str) -> Option<&'a CategoryNode> {
    if path.is_empty() {
        return Some(root);
    }
    root.walk().find(|node| node.path == path)
}

/// Find the node whose immediate child has `child_path`.
///
/// Top-level paths resolve to the root; `None` when no node has such a child.
pub fn find_parent<'a>(root: &'a CategoryNode, child_path: &str) -> Option<&'a CategoryNode> {
    root.walk()
        .find(|node| node.children.iter().any(|child| child.path == child_path))
}

/// The uncategorized leaf, if the tree has one.
pub fn find_uncategorized(root: &CategoryNode) -> Option<&CategoryNode> {
    root.children.iter().find(|child| child.is_uncategorized())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn counts(entries: &[(&str, usize)]) -> HashMap<String, usize> {
        entries
            .iter()
            .map(|(path, count)| ((*path).to_string(), *count))
            .collect()
    }

    fn names(node: &CategoryNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_bare_root() {
        let root = build_tree(Vec::<String>::new(), &HashMap::new());
        assert!(root.is_root);
        assert!(root.children.is_empty());
        assert_eq!(root.total_count(), 0);
    }

    #[test]
    fn test_dev_go_scenario() {
        let root = build_tree(
            ["dev", "dev/go"],
            &counts(&[("dev", 1), ("dev/go", 2), ("", 1)]),
        );

        assert_eq!(names(&root), vec!["dev", "uncategorized"]);
        let dev = &root.children[0];
        assert_eq!(dev.path, "dev");
        assert_eq!(dev.bookmark_count, 1);
        assert_eq!(names(dev), vec!["go"]);
        assert_eq!(dev.children[0].path, "dev/go");
        assert_eq!(dev.children[0].bookmark_count, 2);

        let uncategorized = &root.children[1];
        assert!(uncategorized.is_uncategorized());
        assert!(uncategorized.is_leaf());
        assert_eq!(uncategorized.path, "");
        assert_eq!(uncategorized.bookmark_count, 1);
    }

    #[test]
    fn test_uncategorized_is_appended_after_sorted_children() {
        let root = build_tree(["zeta", "alpha"], &counts(&[("", 3)]));
        assert_eq!(names(&root), vec!["alpha", "zeta", "uncategorized"]);
    }

    #[test]
    fn test_no_uncategorized_when_count_zero() {
        let root = build_tree(["a"], &counts(&[("", 0)]));
        assert_eq!(names(&root), vec!["a"]);
        assert!(find_uncategorized(&root).is_none());
    }

    #[test]
    fn test_intermediate_nodes_have_zero_count() {
        let root = build_tree(["a/b/c"], &counts(&[("a/b/c", 4)]));
        let a = find_node(&root, "a").unwrap();
        let b = find_node(&root, "a/b").unwrap();
        let c = find_node(&root, "a/b/c").unwrap();
        assert_eq!(a.bookmark_count, 0);
        assert_eq!(b.bookmark_count, 0);
        assert_eq!(c.bookmark_count, 4);
        assert_eq!(a.total_count(), 4);
    }

    #[test]
    fn test_prefix_paths_share_a_node() {
        let root = build_tree(["a/b", "a", "a/c"], &counts(&[("a", 2)]));
        assert_eq!(names(&root), vec!["a"]);
        let a = &root.children[0];
        assert_eq!(a.bookmark_count, 2);
        assert_eq!(names(a), vec!["b", "c"]);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let root = build_tree(["a", "a", "a/b", "a/b"], &counts(&[("a/b", 1)]));
        assert_eq!(root.paths(), vec!["a", "a/b"]);
    }

    #[test]
    fn test_children_sorted_by_name_not_by_path() {
        // "a-b" sorts before "a/c" as a full path but after "a" as a name.
        let root = build_tree(["a-b", "a/c"], &HashMap::new());
        assert_eq!(names(&root), vec!["a", "a-b"]);
    }

    #[test]
    fn test_find_node() {
        let root = build_tree(["dev", "dev/go"], &counts(&[("", 1)]));
        assert!(find_node(&root, "").unwrap().is_root);
        assert_eq!(find_node(&root, "dev/go").unwrap().name, "go");
        assert!(find_node(&root, "dev/rust").is_none());
        assert!(find_node(&root, "go").is_none());
    }

    #[test]
    fn test_find_parent() {
        let root = build_tree(["dev", "dev/go", "dev/go/web"], &counts(&[("", 1)]));
        assert!(find_parent(&root, "dev").unwrap().is_root);
        assert_eq!(find_parent(&root, "dev/go").unwrap().path, "dev");
        assert_eq!(find_parent(&root, "dev/go/web").unwrap().path, "dev/go");
        assert!(find_parent(&root, "missing").is_none());
        assert!(find_parent(&root, "").unwrap().is_root);
    }

    #[test]
    fn test_walk_is_preorder() {
        let root = build_tree(["b", "a/x", "a"], &HashMap::new());
        let order: Vec<&str> = root.walk().map(|n| n.path.as_str()).collect();
        assert_eq!(order, vec!["", "a", "a/x", "b"]);
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let root = build_tree(["a//b"], &HashMap::new());
        assert_eq!(root.paths(), vec!["a", "a/b"]);
    }

    fn category_paths() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::collection::vec("[a-c]{1,2}", 1..4).prop_map(|segments| segments.join("/")),
            0..12,
        )
    }

    fn counts_for(paths: &[String]) -> HashMap<String, usize> {
        paths.iter().map(|p| (p.clone(), p.len() % 3)).collect()
    }

    proptest! {
        #[test]
        fn prop_every_path_is_reachable_by_segments(paths in category_paths()) {
            let root = build_tree(&paths, &counts_for(&paths));
            for p in &paths {
                let mut node = &root;
                for segment in path::segments(p) {
                    node = node.child(segment).expect("segment reachable");
                }
                prop_assert_eq!(&node.path, p);
                prop_assert!(find_node(&root, p).is_some());
            }
        }

        #[test]
        fn prop_no_duplicate_nodes(paths in category_paths()) {
            let root = build_tree(&paths, &counts_for(&paths));
            let all = root.paths();
            let unique: HashSet<&str> = all.iter().copied().collect();
            prop_assert_eq!(all.len(), unique.len());
        }

        #[test]
        fn prop_order_independent(
            (paths, shuffled) in category_paths()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let counts = counts_for(&paths);
            prop_assert_eq!(build_tree(&paths, &counts), build_tree(&shuffled, &counts));
        }

        #[test]
        fn prop_parent_contains_child(paths in category_paths()) {
            let root = build_tree(&paths, &HashMap::new());
            for p in &paths {
                let parent = find_parent(&root, p).expect("parent exists");
                let parent = find_node(&root, &parent.path).expect("parent locatable");
                prop_assert!(parent.children.iter().any(|c| &c.path == p));
            }
        }

        #[test]
        fn prop_uncategorized_iff_positive(count in 0usize..3, paths in category_paths()) {
            let mut counts = counts_for(&paths);
            counts.insert(String::new(), count);
            let root = build_tree(&paths, &counts);
            let leaf = find_uncategorized(&root);
            prop_assert_eq!(leaf.is_some(), count > 0);
            if let Some(leaf) = leaf {
                prop_assert!(leaf.is_leaf());
                prop_assert_eq!(leaf.name.as_str(), "uncategorized");
                prop_assert_eq!(root.children.last().map(|c| c.path.as_str()), Some(""));
            }
        }
    }
}
