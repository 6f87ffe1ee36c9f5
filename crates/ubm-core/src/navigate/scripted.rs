//! Scripted [`Prompter`] for exercising traversal loops without a terminal.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{MenuItem, Opener, Prompter, TextValidator};
use crate::{Error, Result};

/// A queued answer.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Pick the first item whose label contains this text.
    Pick(&'static str),
    /// Type this line.
    Text(&'static str),
    /// Answer a yes/no question.
    Confirm(bool),
    /// Abort the current prompt.
    Cancel,
}

/// One prompt the script was asked.
#[derive(Debug, Clone)]
pub struct Asked {
    pub prompt: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<Asked>,
    pub notices: Vec<String>,
    pub rejected: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| Error::Invalid("script exhausted".into()))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[MenuItem]) -> Result<usize> {
        self.asked.push(Asked {
            prompt: prompt.to_string(),
            labels: items.iter().map(|i| i.label.clone()).collect(),
        });
        match self.next()? {
            Answer::Pick(needle) => items
                .iter()
                .position(|i| i.label.contains(needle))
                .ok_or_else(|| Error::NotFound(format!("menu item containing '{needle}'"))),
            Answer::Cancel => Err(Error::Cancelled),
            other => Err(Error::Invalid(format!("expected a pick, got {other:?}"))),
        }
    }

    fn text(
        &mut self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<TextValidator>,
    ) -> Result<String> {
        self.asked.push(Asked {
            prompt: prompt.to_string(),
            labels: Vec::new(),
        });
        loop {
            match self.next()? {
                Answer::Text(text) => {
                    let value = if text.is_empty() {
                        default.unwrap_or_default()
                    } else {
                        text
                    };
                    if let Some(Err(msg)) = validator.map(|v| v(value)) {
                        self.rejected.push(msg);
                        continue;
                    }
                    return Ok(value.to_string());
                },
                Answer::Cancel => return Err(Error::Cancelled),
                other => return Err(Error::Invalid(format!("expected text, got {other:?}"))),
            }
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.asked.push(Asked {
            prompt: prompt.to_string(),
            labels: Vec::new(),
        });
        match self.next()? {
            Answer::Confirm(yes) => Ok(yes),
            Answer::Cancel => Err(Error::Cancelled),
            other => Err(Error::Invalid(format!("expected confirm, got {other:?}"))),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Opener that records URLs and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl Opener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(Error::Io(std::io::Error::other("no browser")));
        }
        Ok(())
    }
}
