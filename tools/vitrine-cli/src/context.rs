//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    data_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file and CLI overrides.
    pub fn load(config_path: Option<&str>, data_dir: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        let data_dir = match data_dir.or(config.storage.data_dir.as_deref()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };
        debug!(data_dir = %data_dir.display(), "context loaded");

        Ok(Self {
            config,
            output,
            cwd,
            data_dir,
            config_path,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let config_names = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding durable state.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The config file in use, if one was found.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Brand name for headers and the checkout message.
    pub fn store_name(&self) -> &str {
        &self.config.store.name
    }

    /// Configured WhatsApp number, when set.
    pub fn whatsapp_number(&self) -> Option<&str> {
        let number = self.config.store.whatsapp.trim();
        if number.is_empty() {
            None
        } else {
            Some(number)
        }
    }

    /// Hero slider auto-advance interval.
    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.config.ui.slide_interval_ms)
    }

    /// Notice lifetime.
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.config.ui.notice_ttl_ms)
    }

    /// Simulated authentication delay.
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.config.ui.login_delay_ms)
    }
}

/// Get the platform-specific default data directory.
fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("vitrine")
    } else {
        PathBuf::from("/tmp").join("vitrine")
    }
}
