//! Command-line interface.
//!
//! With no subcommand `stayzy` starts the TUI. The subcommands print the
//! mock catalog or shell completions and exit.

mod catalog;
mod common;
mod completions;

pub use catalog::{bookings_json, bookings_table, listings_json, listings_table};
pub use common::{print_error, print_info};

use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::utils::{get_config_path, get_log_dir};
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Set by users who want no colors at all.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Student accommodation marketplace in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "stayzy",
    version,
    about = "Student accommodation marketplace in your terminal",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Color theme for this session
    #[arg(long, global = true, value_parser = ["dark", "light", "nocolor"])]
    pub theme: Option<String>,

    /// Keymap preset for this session (standard, vim, emacs)
    #[arg(long, global = true)]
    pub keymap: Option<KeymapPreset>,

    /// Use this config file instead of ~/.config/stayzy/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available accommodations
    Listings {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// List the bookings on the host dashboard
    Bookings {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell; detected from $SHELL when omitted
        shell: Option<Shell>,
    },
    /// Shows logs location and how to view them
    Logs,
    /// Configuration file location
    Config,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(get_config_path)
    }

    /// Apply session-only flags to a copy of the loaded config. The copy is
    /// never saved; see [`crate::App::with_session`].
    pub fn apply_overrides(&self, config: &mut Config, no_color_env: bool) {
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if self.no_colors || no_color_env {
            config.theme = "nocolor".to_string();
        }
        if let Some(preset) = self.keymap {
            config.keymap.preset = preset;
        }
    }
}

/// Run a non-interactive subcommand.
pub fn execute(command: Commands, config_path: &std::path::Path) -> Result<()> {
    match command {
        Commands::Listings { json } => {
            if json {
                println!("{}", listings_json()?);
            } else {
                print!("{}", listings_table());
            }
        }
        Commands::Bookings { json } => {
            if json {
                println!("{}", bookings_json()?);
            } else {
                print!("{}", bookings_table());
            }
        }
        Commands::Completions { shell } => completions::generate(shell)?,
        Commands::Logs => {
            let log_file = get_log_dir().join("stayzy.log");
            print_info(&format!("Log file: {}", log_file.display()));
            println!("Follow it with: tail -f {}", log_file.display());
            println!("Raise verbosity with: RUST_LOG=debug stayzy");
        }
        Commands::Config => {
            print_info(&format!("Config file: {}", config_path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["stayzy", "listings", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Listings { json: true })));

        let cli = Cli::try_parse_from(["stayzy"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_unknown_theme_and_preset() {
        assert!(Cli::try_parse_from(["stayzy", "--theme", "pink"]).is_err());
        assert!(Cli::try_parse_from(["stayzy", "--keymap", "nano"]).is_err());
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = Cli::try_parse_from(["stayzy", "--theme", "light", "--keymap", "vim"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config, false);
        assert_eq!(config.theme, "light");
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);

        // NO_COLOR wins over --theme
        cli.apply_overrides(&mut config, true);
        assert_eq!(config.theme, "nocolor");
    }

    #[test]
    fn test_config_flag_overrides_path() {
        let cli = Cli::try_parse_from(["stayzy", "--config", "/tmp/stayzy.toml"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/stayzy.toml"));
    }
}
