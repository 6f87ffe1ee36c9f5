//! Error types and handling for ubm-core operations.
//!
//! Every fallible operation in the crate returns [`Result<T, Error>`]. Errors
//! are grouped into a small set of [`ErrorKind`]s so that callers can branch on
//! what happened without ever comparing message text.
//!
//! ## Cancellation
//!
//! A user backing out of a prompt (Esc, Ctrl-C, end of input) surfaces as
//! [`Error::Cancelled`]. It is not a failure: the navigator and selector return
//! it untouched from whatever depth they were at, and the CLI reports it as
//! "Cancelled." with a successful exit status.
//!
//! ```rust
//! use ubm_core::{Error, ErrorKind};
//!
//! fn outcome(err: &Error) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::Cancelled => "cancelled",
//!         ErrorKind::NotFound => "missing",
//!         ErrorKind::Invalid => "rejected",
//!         ErrorKind::Io => "io failure",
//!     }
//! }
//!
//! assert_eq!(outcome(&Error::Cancelled), "cancelled");
//! assert_eq!(outcome(&Error::NotFound("bookmark 42".into())), "missing");
//! ```

use thiserror::Error;

/// The main error type for ubm-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The user cancelled an interactive prompt.
    ///
    /// Produced by [`Prompter`](crate::navigate::Prompter) implementations on
    /// interrupt or end-of-input and propagated unchanged through every layer.
    #[error("cancelled")]
    Cancelled,

    /// A bookmark, category or tree node could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    ///
    /// ## Common Causes
    ///
    /// - Category path with an empty segment (`a//b`, `/a`, `a/`)
    /// - Category name containing `/`
    /// - Category nesting deeper than [`MAX_DEPTH`](crate::path::MAX_DEPTH)
    /// - Malformed or unsupported URL
    /// - Deleting a category that still holds bookmarks or subcategories
    #[error("Invalid input: {0}")]
    Invalid(String),

    /// The item being created already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    ///
    /// Typically a hand-edited `bookmarks.json` or `config.toml` that no
    /// longer parses.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage operation failed beyond plain file I/O (locking, backups).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or its location cannot be determined.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`Error`].
///
/// This is the set callers are expected to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The user backed out; not a failure.
    Cancelled,
    /// Something referenced does not exist.
    NotFound,
    /// Input was rejected before anything was mutated.
    Invalid,
    /// Reading or writing persistent state failed.
    Io,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Cancelled => ErrorKind::Cancelled,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Invalid(_) | Self::AlreadyExists(_) => ErrorKind::Invalid,
            Self::Io(_) | Self::Serialization(_) | Self::Storage(_) | Self::Config(_) => {
                ErrorKind::Io
            },
        }
    }

    /// Whether this is a user cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Get a short category string for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::NotFound(_) => "not_found",
            Self::Invalid(_) => "invalid",
            Self::AlreadyExists(_) => "already_exists",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for Results with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
