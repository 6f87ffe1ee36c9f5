//! Bookmark records and the persisted store snapshot.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::path;
use crate::search::contains_ignore_case;
use crate::tree::{CategoryNode, build_tree};

/// A saved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Stable identifier (UUID v4).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Normalized URL.
    pub url: String,
    /// Category path; empty means uncategorized.
    #[serde(default)]
    pub category: String,
    /// When the bookmark was created.
    pub created_at: DateTime<Utc>,
    /// When the bookmark was last modified.
    pub updated_at: DateTime<Utc>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bookmark {
    /// Create a bookmark with a fresh id and timestamps.
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            url: url.into(),
            category: category.into(),
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
            description: None,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Replace the URL.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.touch();
    }

    /// File the bookmark under a different category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.touch();
    }

    /// Replace the description; an empty string clears it.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self.touch();
    }

    /// Add a tag unless already present.
    pub fn add_tag(&mut self, tag: &str) {
        if self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
        self.touch();
    }

    /// Remove a tag if present.
    pub fn remove_tag(&mut self, tag: &str) {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() != before {
            self.touch();
        }
    }

    /// Whether title, URL or description contains `query` (case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
            || contains_ignore_case(&self.url, query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, query))
    }
}

/// Result of looking a bookmark up by title.
#[derive(Debug, PartialEq, Eq)]
pub enum TitleMatch<'a> {
    /// Nothing matched.
    None,
    /// Exactly one bookmark: an exact title match or a sole substring match.
    One(&'a Bookmark),
    /// Several substring matches; the caller must choose.
    Many(Vec<&'a Bookmark>),
}

/// Everything persisted in `bookmarks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Bookmarks in insertion order.
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    /// Registered category paths.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Last save time.
    pub updated_at: DateTime<Utc>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            bookmarks: Vec::new(),
            categories: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

impl StoreData {
    /// Number of bookmarks filed exactly under each category (including `""`).
    pub fn bookmark_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for bookmark in &self.bookmarks {
            *counts.entry(bookmark.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Registered categories plus any non-empty category a bookmark refers to,
    /// sorted and deduplicated.
    pub fn known_categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .categories
            .iter()
            .map(String::as_str)
            .chain(self.bookmarks.iter().map(|b| b.category.as_str()))
            .filter(|c| !c.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Build the category tree for this snapshot.
    pub fn category_tree(&self) -> CategoryNode {
        build_tree(self.known_categories(), &self.bookmark_counts())
    }

    /// Whether `path` is registered.
    pub fn has_category(&self, path: &str) -> bool {
        self.categories.iter().any(|c| c == path)
    }

    /// Register `path` if it is non-empty and not yet known.
    ///
    /// Returns whether the list changed.
    pub fn ensure_category(&mut self, path: &str) -> bool {
        if path.is_empty() || self.has_category(path) {
            return false;
        }
        self.categories.push(path.to_string());
        self.categories.sort();
        true
    }

    /// Whether any registered category or bookmark lies strictly below `path`.
    pub fn has_subcategories(&self, path: &str) -> bool {
        self.known_categories()
            .iter()
            .any(|c| c != path && path::is_within(c, path))
    }

    /// Look a bookmark up by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Mutable lookup by id.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Bookmark> {
        self.bookmarks.iter_mut().find(|b| b.id == id)
    }

    /// Exact title first, then case-insensitive substring candidates.
    pub fn find_by_title(&self, query: &str) -> TitleMatch<'_> {
        if let Some(exact) = self.bookmarks.iter().find(|b| b.title == query) {
            return TitleMatch::One(exact);
        }
        let mut candidates: Vec<&Bookmark> = self
            .bookmarks
            .iter()
            .filter(|b| contains_ignore_case(&b.title, query))
            .collect();
        match candidates.len() {
            0 => TitleMatch::None,
            1 => TitleMatch::One(candidates.remove(0)),
            _ => TitleMatch::Many(candidates),
        }
    }

    /// Bookmarks filed exactly under `category`, in store order.
    pub fn bookmarks_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Bookmark> + 'a {
        self.bookmarks.iter().filter(move |b| b.category == category)
    }
}
