//! # CLI Structure and Argument Parsing
//!
//! Command-line interface for `ubm`, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Add bookmarks (prompts for anything missing)
//! ubm add https://doc.rust-lang.org/book/ "The Book" -c dev/rust
//! ubm add
//!
//! # Browse the category tree and open a bookmark
//! ubm list
//!
//! # Print everything
//! ubm show
//! ubm show --flat --format json
//!
//! # Maintenance
//! ubm edit "The Book"
//! ubm move "The Book" --to reading
//! ubm delete
//! ubm category create dev/go
//! ```
//!
//! Commands that need a prompt refuse to run without a terminal on stdin and
//! point at the flag-driven alternative instead.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Main CLI structure for the `ubm` command
#[derive(Parser, Clone, Debug)]
#[command(name = "ubm")]
#[command(version)]
#[command(about = "ubm - Interactive command-line URL bookmark manager", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, env = "UBM_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding bookmarks.json (defaults to the config directory)
    #[arg(long, global = true, env = "UBM_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Output format for commands that print data
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Add a new bookmark
    Add {
        /// URL to bookmark (prompted when omitted; `https://` is assumed)
        url: Option<String>,
        /// Title (defaults to the URL's domain)
        #[arg(value_name = "TITLE")]
        title_arg: Option<String>,
        /// Title, as a flag
        #[arg(short, long, conflicts_with = "title_arg")]
        title: Option<String>,
        /// Category path such as `dev/rust` (chosen interactively when omitted)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Browse categories and open a bookmark
    #[command(visible_alias = "ls")]
    List,

    /// Print all bookmarks
    Show {
        /// Group by category path instead of drawing a tree
        #[arg(long)]
        flat: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Search titles, URLs and descriptions
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Only search within this category and its subcategories
        #[arg(short, long)]
        category: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
        /// Print matches without offering to open one
        #[arg(long)]
        no_open: bool,
    },

    /// Edit a bookmark's title, URL, category or description
    Edit {
        /// Title (or part of it) of the bookmark to edit
        title: Option<String>,
    },

    /// Move a bookmark to another category
    #[command(visible_alias = "mv")]
    Move(MoveArgs),

    /// Delete a bookmark
    #[command(visible_alias = "rm")]
    Delete {
        /// Bookmark id (chosen interactively when omitted)
        id: Option<String>,
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage categories
    #[command(visible_alias = "cat")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `ubm move`
#[derive(Args, Clone, Debug)]
pub struct MoveArgs {
    /// Title (or part of it) of the bookmark to move
    pub title: Option<String>,
    /// Destination category path
    #[arg(long, conflicts_with = "uncategorize")]
    pub to: Option<String>,
    /// Move the bookmark out of every category
    #[arg(long)]
    pub uncategorize: bool,
    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Subcommands of `ubm category`
#[derive(Subcommand, Clone, Debug)]
pub enum CategoryCommands {
    /// Create a category
    Create {
        /// Full path such as `dev/go` (chosen interactively when omitted)
        path: Option<String>,
    },
    /// Show the category tree with bookmark counts
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Delete an empty category
    #[command(visible_alias = "rm")]
    Delete {
        /// Category path (chosen interactively when omitted)
        path: Option<String>,
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Subcommands of `ubm config`
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config and data directories
    Path,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_positional_and_flags() {
        let cli = Cli::try_parse_from(["ubm", "add", "example.com", "Example", "-c", "dev"]).unwrap();
        match cli.command {
            Commands::Add {
                url,
                title_arg,
                title,
                category,
            } => {
                assert_eq!(url.as_deref(), Some("example.com"));
                assert_eq!(title_arg.as_deref(), Some("Example"));
                assert!(title.is_none());
                assert_eq!(category.as_deref(), Some("dev"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_title_flag_conflicts_with_positional() {
        let result = Cli::try_parse_from(["ubm", "add", "example.com", "A", "--title", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_move_to_conflicts_with_uncategorize() {
        let result = Cli::try_parse_from(["ubm", "move", "x", "--to", "a", "--uncategorize"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_joins_terms() {
        let cli = Cli::try_parse_from(["ubm", "search", "rust", "book", "--no-open"]).unwrap();
        let Commands::Search {
            query, no_open, ..
        } = cli.command
        else {
            panic!("expected search");
        };
        assert_eq!(query, vec!["rust", "book"]);
        assert!(no_open);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ubm", "show", "-v", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["ubm", "ls"]).unwrap().command,
            Commands::List
        ));
        assert!(matches!(
            Cli::try_parse_from(["ubm", "category", "ls"]).unwrap().command,
            Commands::Category {
                command: CategoryCommands::List { .. }
            }
        ));
    }
}
