//! CLI Module
//!
//! Command-line interface for ProfileKit using Clap v4.

mod commands;
mod handler;

pub use commands::load_config;
pub use handler::{CliHandler, Outcome};

use crate::config::Config;
use crate::profile::ConnectionStatus;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ProfileKit - profile card, setup and edit screens for the terminal
#[derive(Parser, Debug)]
#[command(name = "profilekit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (creates log files in .profilekit/logs/)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a profile card (default)
    Card {
        /// Profile draft to show, as JSON
        #[arg(short, long)]
        from: Option<PathBuf>,

        /// Connection status between the viewer and the profile
        #[arg(short, long, default_value = "none")]
        status: ConnectionStatus,
    },

    /// Run the profile setup wizard
    Setup {
        /// Full-page layout instead of the modal
        #[arg(long)]
        page: bool,
    },

    /// Edit an existing profile
    Edit {
        /// Profile draft to edit, as JSON (defaults to the demo profile)
        #[arg(short, long)]
        from: Option<PathBuf>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show effective configuration
    Config,

    /// Log management operations
    Logs {
        #[command(subcommand)]
        operation: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Show log file location and status
    Status,
    /// Clean up old log files
    Clean {
        /// Maximum age in days (default: 7)
        #[arg(short = 'a', long, default_value = "7")]
        days: u64,
    },
}

/// Main CLI entry point
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    if cli.debug {
        tracing::info!("Debug mode enabled");
    }

    match cli.command {
        None => commands::cmd_card(&config, None, ConnectionStatus::None).await,
        Some(Commands::Card { from, status }) => {
            commands::cmd_card(&config, from, status).await
        }
        Some(Commands::Setup { page }) => commands::cmd_setup(&config, page).await,
        Some(Commands::Edit { from }) => commands::cmd_edit(&config, from).await,
        Some(Commands::Init { force }) => commands::cmd_init(force).await,
        Some(Commands::Config) => commands::cmd_config(&config).await,
        Some(Commands::Logs { operation }) => commands::cmd_logs(operation).await,
    }
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
    fn test_parse_card_with_status() {
        let cli = Cli::try_parse_from(["profilekit", "card", "--status", "accepted"]).unwrap();
        match cli.command {
            Some(Commands::Card { from, status }) => {
                assert!(from.is_none());
                assert_eq!(status, ConnectionStatus::Accepted);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["profilekit", "card", "--status", "friends"]).is_err());
    }

    #[test]
    fn test_parse_setup_page_with_global_debug() {
        let cli = Cli::try_parse_from(["profilekit", "setup", "--page", "-d"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Setup { page: true })));
    }

    #[test]
    fn test_no_subcommand_defaults_to_card() {
        let cli = Cli::try_parse_from(["profilekit"]).unwrap();
        assert!(cli.command.is_none());
    }
}
