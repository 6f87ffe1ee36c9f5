//! Terminal prompts backed by `inquire`.

use std::fmt;

use inquire::error::InquireError;
use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Select, Text};
use ubm_core::navigate::TextValidator;
use ubm_core::{Error, MenuItem, Prompter, search};

/// [`Prompter`] that draws menus on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct InquirePrompter {
    page_size: usize,
}

impl InquirePrompter {
    /// Prompter showing `page_size` menu rows at a time.
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }
}

struct Row<'a>(&'a MenuItem);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.label)
    }
}

fn map_err(err: InquireError) -> Error {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => Error::Cancelled,
        InquireError::IO(e) => Error::Io(e),
        other => Error::Invalid(other.to_string()),
    }
}

/// Rank filtered rows by their original position so the menu order never changes.
fn score(input: &str, row: &Row<'_>, _value: &str, index: usize) -> Option<i64> {
    search::matches(&row.0.search_text, input).then(|| -i64::try_from(index).unwrap_or(i64::MAX))
}

fn answer_line(option: ListOption<&Row<'_>>) -> String {
    let item = option.value.0;
    match item.detail.as_deref().and_then(|d| d.lines().next()) {
        Some(detail) => format!("{} ({detail})", item.label),
        None => item.label.clone(),
    }
}

impl Prompter for InquirePrompter {
    fn select(&mut self, prompt: &str, items: &[MenuItem]) -> ubm_core::Result<usize> {
        let rows: Vec<Row<'_>> = items.iter().map(Row).collect();
        Select::new(prompt, rows)
            .with_page_size(self.page_size)
            .with_scorer(&score)
            .with_formatter(&answer_line)
            .with_help_message("↑↓ to move, enter to select, type to filter, esc to cancel")
            .raw_prompt()
            .map(|choice| choice.index)
            .map_err(map_err)
    }

    fn text(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<TextValidator>,
    ) -> ubm_core::Result<String> {
        let mut text = Text::new(prompt);
        if let Some(default) = default {
            text = text.with_default(default);
        }
        if let Some(validate) = validator {
            text = text.with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
                Ok(match validate(input) {
                    Ok(()) => Validation::Valid,
                    Err(msg) => Validation::Invalid(msg.into()),
                })
            });
        }
        text.prompt().map_err(map_err)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> ubm_core::Result<bool> {
        Confirm::new(prompt)
            .with_default(default)
            .prompt()
            .map_err(map_err)
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
