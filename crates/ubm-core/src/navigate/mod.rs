//! Interactive traversal of the category tree.
//!
//! Both the [`Navigator`] and the [`CategorySelector`] talk to the terminal
//! only through the [`Prompter`] trait, so the traversal logic runs unchanged
//! against a real terminal or a scripted test double.

mod navigator;
mod selector;

#[cfg(test)]
pub(crate) mod scripted;

pub use navigator::{BookmarkAction, NavigationOutcome, Navigator};
pub use selector::CategorySelector;

use crate::Result;

/// Validation hook for free-text prompts. `Err` carries the message shown to
/// the user before they are asked again.
pub type TextValidator = fn(&str) -> std::result::Result<(), String>;

/// One row of a selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown in the list.
    pub label: String,
    /// Text the type-to-filter search matches against.
    pub search_text: String,
    /// Optional extra line shown for the highlighted row.
    pub detail: Option<String>,
}

impl MenuItem {
    /// Item whose search text is its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            search_text: label.clone(),
            label,
            detail: None,
        }
    }

    /// Append extra searchable text (for example a URL).
    #[must_use]
    pub fn with_search_extra(mut self, extra: &str) -> Self {
        self.search_text.push(' ');
        self.search_text.push_str(extra);
        self
    }

    /// Attach a detail line.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Terminal interaction used by the traversal loops.
///
/// Implementations map every user abort (Esc, Ctrl-C, end of input) to
/// [`Error::Cancelled`](crate::Error::Cancelled).
pub trait Prompter {
    /// Let the user pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[MenuItem]) -> Result<usize>;

    /// Ask for a line of text, re-asking while `validator` rejects it.
    fn text(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<TextValidator>,
    ) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Show an informational line.
    fn notify(&mut self, message: &str);
}

/// Opens a URL for the user.
pub trait Opener {
    /// Open `url`; failures are reported, never fatal to navigation.
    fn open(&self, url: &str) -> Result<()>;
}

/// Validator for a new category name.
pub fn category_name_validator(input: &str) -> std::result::Result<(), String> {
    crate::path::validate_name(input).map_err(|e| e.to_string())
}
