//! # Utility Functions and Helpers
//!
//! Shared helpers used across the CLI commands.
//!
//! - [`formatting`]: colors and labels for terminal output
//! - [`logging`]: tracing subscriber and color control setup

pub mod formatting;
pub mod logging;
