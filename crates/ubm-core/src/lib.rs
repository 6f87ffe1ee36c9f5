//! # ubm-core
//!
//! Core functionality for ubm - a personal bookmark manager that files URLs
//! under a slash-delimited category hierarchy.
//!
//! ## Architecture
//!
//! - **Path model** ([`path`]): pure functions over category path strings
//! - **Category tree** ([`tree`]): builds the hierarchy from flat paths and
//!   bookmark counts, and locates nodes in it
//! - **Navigation** ([`navigate`]): the interactive navigator and category
//!   selector, written against the [`Prompter`] trait
//! - **Storage** ([`storage`]): locked JSON persistence with rotating backups
//! - **Configuration** ([`config`]): TOML settings and directory resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use ubm_core::{Bookmark, StoreData, tree::find_node};
//!
//! let mut data = StoreData::default();
//! data.ensure_category("dev/rust");
//! data.bookmarks.push(Bookmark::new("The Book", "https://doc.rust-lang.org/book/", "dev/rust"));
//! data.bookmarks.push(Bookmark::new("Inbox", "https://example.com/", ""));
//!
//! let root = data.category_tree();
//! assert_eq!(root.children.len(), 2); // "dev" and "uncategorized"
//! assert_eq!(find_node(&root, "dev/rust").map(|n| n.bookmark_count), Some(1));
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Branch on [`Error::kind`]
//! rather than on message text:
//!
//! ```rust
//! use ubm_core::{ErrorKind, path};
//!
//! let err = path::validate("a//b").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Invalid);
//! ```

/// Configuration and directory resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// Interactive navigator and category selector
pub mod navigate;
/// Category path helpers
pub mod path;
/// Substring matching for search and menu filtering
pub mod search;
/// JSON-file bookmark store
pub mod storage;
/// Category tree builder and locator
pub mod tree;
/// Bookmark and store data types
pub mod types;
/// URL validation and normalization
pub mod urls;

// Re-export commonly used types
pub use config::{Config, DisplayFormat, Paths};
pub use error::{Error, ErrorKind, Result};
pub use navigate::{
    BookmarkAction, CategorySelector, MenuItem, NavigationOutcome, Navigator, Opener, Prompter,
};
pub use storage::{Storage, StorageOptions};
pub use tree::CategoryNode;
pub use types::{Bookmark, StoreData, TitleMatch};
