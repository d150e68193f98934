//! Command-line interface.
//!
//! With no subcommand the TUI is started; the subcommands are small
//! non-interactive helpers.

mod completions;
mod profiles;

use crate::config::Config;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pick a profile, enter its PIN if it has one
#[derive(Parser, Debug)]
#[command(name = "profilegate", version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/profilegate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme: dark, light or nocolor (overrides the config file)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured profiles and whether each needs a PIN
    Profiles {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file location after applying `--config`.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::paths::get_config_path)
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        Config::load_or_create(&path).context("Failed to load configuration")
    }

    /// Run a non-interactive subcommand. Returns `Ok(false)` when there is
    /// none and the TUI should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Profiles { json }) => {
                let config = self.load_config()?;
                profiles::print(&config, *json)?;
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Pick the theme: `NO_COLOR` wins, then `--theme`, then the config file.
pub fn resolve_theme(no_color: bool, flag: Option<&str>, configured: &str) -> Result<ThemeType> {
    if no_color {
        return Ok(ThemeType::NoColor);
    }
    let name = flag.unwrap_or(configured);
    name.parse::<ThemeType>()
        .map_err(anyhow::Error::msg)
        .context("Invalid theme")
}
