use tracing::debug;

use super::{MenuItem, Prompter, category_name_validator};
use crate::path::{self, MAX_DEPTH};
use crate::tree::{CategoryNode, find_node, find_parent};
use crate::{Error, Result};

enum Choice<'t> {
    Back,
    Enter(&'t CategoryNode),
    CreateNew,
    SelectThisLevel,
}

/// Walks the category tree to pick or create a category path.
///
/// Every level offers `Create new category`; every level below the root also
/// offers `Select this category`. The uncategorized bucket is not a
/// selectable category and is never listed.
pub struct CategorySelector<'a> {
    prompter: &'a mut dyn Prompter,
    root: &'a CategoryNode,
    start: String,
}

impl<'a> CategorySelector<'a> {
    /// Selector over `root`, starting at the root.
    pub fn new(prompter: &'a mut dyn Prompter, root: &'a CategoryNode) -> Self {
        Self {
            prompter,
            root,
            start: String::new(),
        }
    }

    /// Start at `path` when it exists in the tree; otherwise at the root.
    #[must_use]
    pub fn starting_at(mut self, path: &str) -> Self {
        if find_node(self.root, path).is_some() {
            self.start = path.to_string();
        } else {
            debug!("start path '{path}' not in tree; starting at root");
        }
        self
    }

    /// Run until a path is chosen or created. The result is never empty.
    pub fn select(self) -> Result<String> {
        let Self {
            prompter,
            root,
            start,
        } = self;
        let mut current = start;
        loop {
            let node = find_node(root, &current).unwrap_or(root);
            let choices = choices(&current, node);
            let items: Vec<MenuItem> = choices.iter().map(|c| menu_item(c, &current)).collect();
            let prompt = format!("Select category (current: {})", display_current(&current));
            let index = prompter.select(&prompt, &items)?;

            match choices.get(index) {
                Some(Choice::Back) => {
                    current = find_parent(root, &current)
                        .map(|parent| parent.path.clone())
                        .unwrap_or_default();
                },
                Some(Choice::Enter(child)) => current.clone_from(&child.path),
                Some(Choice::CreateNew) => return create_new(prompter, &current),
                Some(Choice::SelectThisLevel) => return Ok(current),
                None => debug!("selection index {index} out of range"),
            }
            debug!("selector moved to '{current}'");
        }
    }
}

fn choices<'t>(current: &str, node: &'t CategoryNode) -> Vec<Choice<'t>> {
    let at_root = current.is_empty();
    let mut choices = Vec::with_capacity(node.children.len() + 3);
    if !at_root {
        choices.push(Choice::Back);
    }
    choices.extend(
        node.children
            .iter()
            .filter(|child| !child.is_uncategorized())
            .map(Choice::Enter),
    );
    choices.push(Choice::CreateNew);
    if !at_root {
        choices.push(Choice::SelectThisLevel);
    }
    choices
}

fn menu_item(choice: &Choice<'_>, current: &str) -> MenuItem {
    match choice {
        Choice::Back => MenuItem::new("⬅  Back to parent"),
        Choice::Enter(node) if node.bookmark_count > 0 => MenuItem::new(format!(
            "📁 {} ({} bookmarks)",
            node.name, node.bookmark_count
        )),
        Choice::Enter(node) => MenuItem::new(format!("📁 {}", node.name)),
        Choice::CreateNew => MenuItem::new("➕ Create new category"),
        Choice::SelectThisLevel => MenuItem::new(format!("✅ Select this category ({current})")),
    }
}

fn display_current(current: &str) -> &str {
    if current.is_empty() { "root" } else { current }
}

fn create_new(prompter: &mut dyn Prompter, parent: &str) -> Result<String> {
    if path::depth(parent) >= MAX_DEPTH {
        return Err(Error::Invalid(format!(
            "cannot nest below '{parent}': maximum depth is {MAX_DEPTH}"
        )));
    }
    let name = prompter.text("New category name", None, Some(category_name_validator))?;
    let name = name.trim();
    path::validate_name(name)?;
    let created = path::join(parent, name);
    path::validate(&created)?;
    debug!("new category path '{created}'");
    Ok(created)
}
