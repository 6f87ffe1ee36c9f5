//! Edit command implementation

use anyhow::Result;
use colored::Colorize;
use ubm_core::{Bookmark, CategorySelector, MenuItem, Prompter, path, urls};

use super::{chosen, locate};
use crate::context::Context;
use crate::utils::formatting::ok_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Url,
    Category,
    Description,
}

impl Field {
    const ALL: [Self; 4] = [Self::Title, Self::Url, Self::Category, Self::Description];

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Url => "URL",
            Self::Category => "Category",
            Self::Description => "Description",
        }
    }

    fn current(self, bookmark: &Bookmark) -> String {
        match self {
            Self::Title => bookmark.title.clone(),
            Self::Url => bookmark.url.clone(),
            Self::Category => path::display(&bookmark.category).to_string(),
            Self::Description => bookmark.description.clone().unwrap_or_default(),
        }
    }
}

fn url_validator(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Ok(());
    }
    urls::normalize(input).map(|_| ()).map_err(|e| e.to_string())
}

/// Apply `value` to `field`; blank input keeps the old value.
///
/// Returns whether anything changed.
fn apply(bookmark: &mut Bookmark, field: Field, value: &str) -> ubm_core::Result<bool> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(false);
    }
    match field {
        Field::Title if value != bookmark.title => bookmark.set_title(value),
        Field::Url => {
            let url = urls::normalize(value)?;
            if url == bookmark.url {
                return Ok(false);
            }
            bookmark.set_url(url);
        },
        Field::Category if value != bookmark.category => {
            path::validate(value)?;
            bookmark.set_category(value);
        },
        Field::Description if Some(value) != bookmark.description.as_deref() => {
            bookmark.set_description(value);
        },
        _ => return Ok(false),
    }
    Ok(true)
}

/// Edit one field of a bookmark chosen by title or by browsing.
pub fn execute(ctx: &mut Context, title: Option<&str>) -> Result<()> {
    ctx.require_terminal("edit", None)?;
    let data = ctx.storage.load()?;
    let Some(original) = locate(ctx, &data, title, "edit")? else {
        return Ok(());
    };

    let items: Vec<MenuItem> = Field::ALL
        .iter()
        .map(|f| MenuItem::new(f.name()).with_detail(f.current(&original)))
        .collect();
    let prompt = format!("Edit which field of '{}'?", original.title);
    let index = ctx.prompter.select(&prompt, &items)?;
    let field = chosen(&Field::ALL, index)?;

    let value = match field {
        Field::Category => {
            let root = data.category_tree();
            CategorySelector::new(&mut ctx.prompter, &root)
                .starting_at(&original.category)
                .select()?
        },
        Field::Url => {
            let current = original.url.clone();
            ctx.prompter.text("New URL", Some(&current), Some(url_validator))?
        },
        Field::Title | Field::Description => {
            let current = field.current(&original);
            let prompt = format!("New {} (empty keeps the current value)", field.name().to_lowercase());
            let default = (!current.is_empty()).then_some(current.as_str());
            ctx.prompter.text(&prompt, default, None)?
        },
    };

    let mut edited = original.clone();
    if !apply(&mut edited, field, &value)? {
        println!("No changes made.");
        return Ok(());
    }

    println!("{}", field.name().bold());
    println!("  {} {}", "-".red(), field.current(&original).red());
    println!("  {} {}", "+".green(), field.current(&edited).green());
    if !ctx.confirm("Save changes?", false)? {
        println!("No changes made.");
        return Ok(());
    }

    ctx.storage.update_bookmark(&edited)?;
    println!("{} Updated '{}'", ok_mark(), edited.title);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Bookmark {
        Bookmark::new("Go", "https://go.dev/", "dev")
    }

    #[test]
    fn test_blank_keeps_value() {
        let mut b = sample();
        assert!(!apply(&mut b, Field::Title, "   ").unwrap());
        assert_eq!(b.title, "Go");
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut b = sample();
        assert!(!apply(&mut b, Field::Url, "go.dev").unwrap());
        assert!(!apply(&mut b, Field::Category, "dev").unwrap());
    }

    #[test]
    fn test_url_is_normalized() {
        let mut b = sample();
        assert!(apply(&mut b, Field::Url, "golang.org").unwrap());
        assert_eq!(b.url, "https://golang.org/");
        assert!(apply(&mut b, Field::Url, "not a url").is_err());
    }

    #[test]
    fn test_description_set() {
        let mut b = sample();
        assert!(apply(&mut b, Field::Description, "Language home").unwrap());
        assert_eq!(b.description.as_deref(), Some("Language home"));
        assert!(!apply(&mut b, Field::Description, "Language home").unwrap());
    }

    #[test]
    fn test_invalid_category_rejected() {
        let mut b = sample();
        assert!(apply(&mut b, Field::Category, "a//b").is_err());
        assert_eq!(b.category, "dev");
    }
}
