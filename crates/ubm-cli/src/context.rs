//! Shared state handed to every command.

use std::io::IsTerminal;

use anyhow::{Context as _, Result, anyhow};
use tracing::debug;
use ubm_core::{Config, Paths, Prompter, Storage, StorageOptions};

use crate::browser::Browser;
use crate::cli::Cli;
use crate::error::CliError;
use crate::prompt::InquirePrompter;

/// Resolved locations, configuration, store and terminal collaborators.
pub struct Context {
    /// Config and data directories in effect.
    pub paths: Paths,
    /// Loaded configuration.
    pub config: Config,
    /// Bookmark store.
    pub storage: Storage,
    /// Terminal prompts.
    pub prompter: InquirePrompter,
    /// Browser launcher.
    pub browser: Browser,
    interactive: bool,
}

impl Context {
    /// Resolve directories, load configuration and open the store.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let paths = Paths::resolve(cli.config_dir.clone(), cli.data_dir.clone())?;
        debug!(
            "config dir {}, data dir {}",
            paths.config_dir.display(),
            paths.data_dir.display()
        );

        if Config::init(&paths.config_dir)? {
            debug!("wrote default configuration");
        }
        let config = Config::load_from(&paths.config_dir)?;
        let storage = Storage::open(&paths.data_dir, StorageOptions::from(&config))
            .with_context(|| format!("opening store in {}", paths.data_dir.display()))?;

        Ok(Self {
            prompter: InquirePrompter::new(config.page_size),
            browser: Browser::new(config.browser.clone()),
            storage,
            config,
            paths,
            interactive: std::io::stdin().is_terminal(),
        })
    }

    /// Whether stdin is a terminal.
    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Fail with a usage error unless prompts can be shown.
    ///
    /// `alternative` names the flag-driven form of the command, when it has one.
    pub fn require_terminal(&self, command: &str, alternative: Option<&str>) -> Result<()> {
        if self.interactive {
            return Ok(());
        }
        let message = match alternative {
            Some(alternative) => format!(
                "`ubm {command}` needs an interactive terminal; use `{alternative}` instead"
            ),
            None => format!("`ubm {command}` needs an interactive terminal"),
        };
        Err(CliError::usage(anyhow!(message)).into())
    }

    /// Ask for confirmation, or accept `yes` without asking.
    pub fn confirm(&mut self, prompt: &str, yes: bool) -> Result<bool> {
        if yes {
            return Ok(true);
        }
        if !self.interactive {
            return Err(CliError::usage(anyhow!(
                "confirmation needs an interactive terminal; pass --yes to skip it"
            ))
            .into());
        }
        Ok(self.prompter.confirm(prompt, false)?)
    }
}
