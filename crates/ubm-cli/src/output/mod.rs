//! # Output Formatting
//!
//! Renderers for the commands that print data rather than prompt for it.
//!
//! - [`text`]: human-readable trees and lists with color
//! - [`json`]: machine-readable JSON for scripts
//!
//! ```bash
//! ubm show                          # tree
//! ubm show --flat                   # grouped by category path
//! ubm show --format json | jq '.[] | .url'
//! ```
//!
//! Renderers build strings instead of printing so they can be tested without
//! a terminal; commands print the result.

pub mod json;
pub mod text;
