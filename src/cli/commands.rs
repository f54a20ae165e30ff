//! CLI subcommands: card, setup, edit, init, config, logs, and config loading.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::LogCommands;
use super::handler::{CliHandler, Outcome};
use crate::config::Config;
use crate::error::ProfileKitError;
use crate::profile::{ConnectionStatus, Profile, ProfileDraft};
use crate::services::{ProfileService, SimulatedProfileService};
use crate::tui::{self, App, ProfileCard, ProfileEdit, ProfileSetup, Screen, SetupLayout, Theme};

/// Load configuration from file or defaults
pub async fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from custom path: {}", path);
        Config::load_from_path(path)?
    } else {
        tracing::debug!("Loading default configuration");
        Config::load()?
    };

    // Validate configuration
    config.validate()?;

    Ok(config)
}

/// Read a JSON profile draft
pub(crate) fn read_draft(path: &Path) -> crate::error::Result<ProfileDraft> {
    let contents = std::fs::read_to_string(path)?;
    let mut draft: ProfileDraft = serde_json::from_str(&contents)?;
    draft.refresh_avatar_preview();
    Ok(draft)
}

fn load_draft(from: Option<PathBuf>) -> Result<ProfileDraft> {
    match from {
        Some(path) => read_draft(&path)
            .with_context(|| format!("Failed to read profile from {}", path.display())),
        None => Ok(Profile::sample().draft),
    }
}

fn build_app(config: &Config, screen: Screen) -> App<CliHandler> {
    let service: Arc<dyn ProfileService> =
        Arc::new(SimulatedProfileService::new(config.simulation.latency()));
    App::new(screen, CliHandler::default(), service)
        .with_theme(Theme::from_accent(config.ui.accent))
}

/// Text printed once the terminal is restored
fn outcome_report(outcome: &Outcome) -> crate::error::Result<Option<String>> {
    match outcome {
        Outcome::Completed(draft) | Outcome::Saved(draft) => {
            Ok(Some(serde_json::to_string_pretty(draft)?))
        }
        Outcome::Open | Outcome::Closed | Outcome::Back => Ok(None),
    }
}

/// Show a profile card
pub(crate) async fn cmd_card(
    config: &Config,
    from: Option<PathBuf>,
    status: ConnectionStatus,
) -> Result<()> {
    let profile = Profile::new(load_draft(from)?, status);
    tracing::info!("Showing card for {:?} ({:?})", profile.draft.name, status);

    let app = build_app(config, Screen::Card(ProfileCard::new(profile)));
    let handler = tui::run(app, config.ui.tick_rate()).await?;

    for action in &handler.actions {
        println!("{}", action);
    }
    Ok(())
}

/// Run the setup wizard and print the completed draft
pub(crate) async fn cmd_setup(config: &Config, page: bool) -> Result<()> {
    let layout = if page {
        SetupLayout::Page
    } else {
        SetupLayout::Modal
    };
    let app = build_app(config, Screen::Setup(ProfileSetup::new(layout)));
    let handler = tui::run(app, config.ui.tick_rate()).await?;

    match outcome_report(&handler.outcome)? {
        Some(json) => println!("{}", json),
        None => eprintln!("Profile setup cancelled"),
    }
    Ok(())
}

/// Run the edit modal and print the saved draft
pub(crate) async fn cmd_edit(config: &Config, from: Option<PathBuf>) -> Result<()> {
    let draft = load_draft(from)?;
    let app = build_app(config, Screen::Edit(ProfileEdit::new(draft)));
    let handler = tui::run(app, config.ui.tick_rate()).await?;

    match outcome_report(&handler.outcome)? {
        Some(json) => println!("{}", json),
        None => eprintln!("No changes saved"),
    }
    Ok(())
}

/// Initialize configuration file
pub(crate) async fn cmd_init(force: bool) -> Result<()> {
    let config_path =
        Config::system_config_path().context("Could not determine config directory")?;

    // Check if config already exists
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite",
            config_path.display()
        );
    }

    Config::default().save(&config_path)?;

    println!("Configuration initialized at: {}", config_path.display());
    println!("Edit [simulation] latency_ms to change how long saves take.");
    Ok(())
}

/// Show configuration
pub(crate) async fn cmd_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).map_err(ProfileKitError::from)?;

    if let Some(path) = Config::system_config_path() {
        println!("# System config: {}", path.display());
    }
    println!("{}", rendered);
    Ok(())
}

/// Log management operations
pub(crate) async fn cmd_logs(operation: LogCommands) -> Result<()> {
    use crate::logging;

    let log_dir = logging::default_log_dir();

    match operation {
        LogCommands::Status => {
            println!("Log directory: {}", log_dir.display());
            if let Some(active) = logging::get_log_path() {
                println!("Active log: {}", active.display());
            }

            if log_dir.exists() {
                let mut file_count = 0;
                let mut total_size = 0u64;
                for entry in std::fs::read_dir(&log_dir)? {
                    let entry = entry?;
                    if entry.path().extension().is_some_and(|e| e == "log") {
                        file_count += 1;
                        total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
                    }
                }
                println!("Log files: {}", file_count);
                println!("Total size: {:.2} KB", total_size as f64 / 1024.0);
            } else {
                println!("No logs found. Run with -d to enable debug logging.");
            }
            Ok(())
        }
        LogCommands::Clean { days } => {
            let removed = logging::cleanup_logs_in(&log_dir, days)?;
            println!("Removed {} log file(s) older than {} day(s)", removed, days);
            Ok(())
        }
    }
}
