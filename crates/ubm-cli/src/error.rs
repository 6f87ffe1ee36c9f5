//! CLI error handling with semantic exit codes.
//!
//! Failures are mapped to a small set of exit codes so scripts can tell a
//! missing bookmark from a corrupt store without parsing messages.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed (or the user cancelled a prompt) |
//! | 1 | `Internal` | Unexpected/internal error, I/O failure |
//! | 2 | `Usage` | Invalid arguments, input or configuration |
//! | 3 | `NotFound` | Bookmark or category not found |
//! | 7 | `Integrity` | Bookmark store cannot be parsed |
//!
//! # Usage
//!
//! ```bash
//! ubm delete 0b7c2f0e-... -y
//! case $? in
//!     0) echo "Deleted" ;;
//!     3) echo "No such bookmark" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

use ubm_core::{Error as CoreError, ErrorKind};

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments, input or configuration (exit code 2).
    ///
    /// Also used when an interactive command runs without a terminal.
    Usage = 2,

    /// Requested bookmark or category not found (exit code 3).
    NotFound = 3,

    /// Store or backup data is corrupt or unreadable (exit code 7).
    Integrity = 7,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Integrity => "integrity error",
        }
    }

    /// Category for a core error.
    #[must_use]
    pub const fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Serialization(_) => Self::Integrity,
            CoreError::Config(_) => Self::Usage,
            _ => match err.kind() {
                ErrorKind::NotFound => Self::NotFound,
                ErrorKind::Invalid => Self::Usage,
                ErrorKind::Cancelled | ErrorKind::Io => Self::Internal,
            },
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Only a fallback for errors that carry neither a [`CliError`] nor a
    /// core error in their chain.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("not found")
            || msg_lower.contains("no such")
            || msg_lower.contains("does not exist")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("corrupt") || msg_lower.contains("failed to parse") {
            return Self::Integrity;
        }

        if msg_lower.contains("invalid argument")
            || msg_lower.contains("missing required")
            || msg_lower.contains("invalid value")
            || msg_lower.contains("cannot use")
        {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// ```rust,ignore
/// use ubm_cli::error::{CliError, ErrorCategory};
/// use anyhow::anyhow;
///
/// let err = CliError::usage(anyhow!("`ubm list` needs an interactive terminal"));
/// assert_eq!(err.category, ErrorCategory::Usage);
/// ```
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // Skip the wrapped error itself; Display already prints it.
        self.source.chain().nth(1)
    }
}

/// Determine the error category of an `anyhow::Error`.
///
/// An explicit [`CliError`] wins, then the first core error in the chain;
/// the message is consulted only when neither is present.
#[must_use]
pub fn category_of(err: &anyhow::Error) -> ErrorCategory {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.category;
    }
    if let Some(core) = core_error(err) {
        return ErrorCategory::from_core(core);
    }
    ErrorCategory::infer_from_message(&err.to_string())
}

/// Determine the exit code from an `anyhow::Error`.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    category_of(err).exit_code()
}

/// Whether the error is a user cancellation anywhere in its chain.
#[must_use]
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    core_error(err).is_some_and(CoreError::is_cancelled)
}

fn core_error(err: &anyhow::Error) -> Option<&CoreError> {
    err.chain().find_map(|cause| cause.downcast_ref::<CoreError>())
}
