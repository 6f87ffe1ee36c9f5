//! Opening bookmarks in a web browser.

use std::process::{Command, Stdio};

use tracing::debug;
use ubm_core::{Error, Opener};

/// Opens URLs with the configured browser command, or the system default.
#[derive(Debug, Clone, Default)]
pub struct Browser {
    command: Option<String>,
}

impl Browser {
    /// Browser honoring the `browser` config setting.
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl Opener for Browser {
    fn open(&self, url: &str) -> ubm_core::Result<()> {
        match &self.command {
            Some(command) => {
                debug!("opening {url} with {command}");
                let mut parts = command.split_whitespace();
                let program = parts
                    .next()
                    .ok_or_else(|| Error::Config("browser command is empty".into()))?;
                Command::new(program)
                    .args(parts)
                    .arg(url)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()?;
                Ok(())
            },
            None => {
                debug!("opening {url} with the system default browser");
                open::that_detached(url)?;
                Ok(())
            },
        }
    }
}

/// Open `url`, printing it for manual use when no browser can be started.
pub fn open_or_print(opener: &dyn Opener, url: &str) {
    if let Err(err) = opener.open(url) {
        tracing::warn!("failed to open browser ({}): {err}", err.category());
        println!("Please open manually: {url}");
    }
}
