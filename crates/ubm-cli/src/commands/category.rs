//! Category command implementation

use anyhow::Result;
use ubm_core::navigate::category_name_validator;
use ubm_core::{CategorySelector, MenuItem, Prompter, StoreData, path};

use super::chosen;
use crate::cli::{CategoryCommands, OutputFormat};
use crate::context::Context;
use crate::output::{json, text};
use crate::utils::formatting::{category_path, ok_mark};

/// Dispatch `ubm category ...`.
pub fn execute(ctx: &mut Context, command: &CategoryCommands) -> Result<()> {
    match command {
        CategoryCommands::Create { path } => create(ctx, path.as_deref()),
        CategoryCommands::List { format } => list(ctx, *format),
        CategoryCommands::Delete { path, yes } => delete(ctx, path.as_deref(), *yes),
    }
}

fn create(ctx: &mut Context, requested: Option<&str>) -> Result<()> {
    let new_path = if let Some(requested) = requested {
        requested.trim().to_string()
    } else {
        ctx.require_terminal("category create", Some("ubm category create PATH"))?;
        let data = ctx.storage.load()?;
        let root = data.category_tree();
        let chosen = CategorySelector::new(&mut ctx.prompter, &root).select()?;
        if data.known_categories().contains(&chosen) {
            // An existing category was picked: create beneath it.
            let prompt = format!("New category name under {chosen}");
            let name = ctx
                .prompter
                .text(&prompt, None, Some(category_name_validator))?;
            let name = name.trim();
            path::validate_name(name)?;
            path::join(&chosen, name)
        } else {
            chosen
        }
    };

    ctx.storage.add_category(&new_path)?;
    println!("{} Created category {}", ok_mark(), category_path(&new_path));
    Ok(())
}

fn list(ctx: &Context, format: OutputFormat) -> Result<()> {
    let data = ctx.storage.load()?;
    let root = data.category_tree();
    if format == OutputFormat::Json {
        println!("{}", json::categories(&root)?);
        return Ok(());
    }
    if root.children.is_empty() {
        println!("No categories yet. Create one with `ubm category create PATH`.");
        return Ok(());
    }
    println!("{}", text::category_tree(&root));
    Ok(())
}

/// Registered categories with no bookmarks and nothing beneath them.
fn deletable(data: &StoreData) -> Vec<String> {
    data.known_categories()
        .into_iter()
        .filter(|c| data.bookmarks_in(c).next().is_none() && !data.has_subcategories(c))
        .collect()
}

fn delete(ctx: &mut Context, requested: Option<&str>, yes: bool) -> Result<()> {
    let target = if let Some(requested) = requested {
        requested.trim().to_string()
    } else {
        ctx.require_terminal("category delete", Some("ubm category delete PATH --yes"))?;
        let data = ctx.storage.load()?;
        let candidates = deletable(&data);
        if candidates.is_empty() {
            println!("No empty categories to delete.");
            return Ok(());
        }
        let items: Vec<MenuItem> = candidates
            .iter()
            .map(|c| MenuItem::new(format!("📁 {c}")))
            .collect();
        let index = ctx.prompter.select("Delete which empty category?", &items)?;
        chosen(&candidates, index)?
    };

    let prompt = format!("Delete category '{target}'?");
    if !ctx.confirm(&prompt, yes)? {
        println!("Deletion cancelled.");
        return Ok(());
    }
    ctx.storage.remove_category(&target)?;
    println!("{} Deleted category {}", ok_mark(), category_path(&target));
    Ok(())
}
