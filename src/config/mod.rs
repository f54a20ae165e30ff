//! Configuration Module
//!
//! Handles application configuration loading, validation, and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Simulated backend behaviour
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal UI options
    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed delay applied to every save/complete (default: 1500ms)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    1500
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl SimulationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to file
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Write JSON lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Accent color used for borders, focus markers and buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Gold,
    Green,
}

impl std::str::FromStr for Accent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "gold" => Ok(Self::Gold),
            "green" => Ok(Self::Green),
            other => Err(format!("unknown accent: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval driving the loading spinner (default: 100ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub accent: Accent,
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            accent: Accent::default(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. System config: ~/.config/profilekit/config.toml
    /// 3. Local config: ./profilekit.toml
    /// 4. Environment variables
    pub fn load() -> Result<Self> {
        tracing::debug!("Loading configuration...");

        let mut config = Self::default();

        if let Some(system_config_path) = Self::system_config_path()
            && system_config_path.exists()
        {
            tracing::debug!("Loading system config from: {:?}", system_config_path);
            config = Self::merge_from_file(config, &system_config_path)?;
        }

        let local_config_path = Self::local_config_path();
        if local_config_path.exists() {
            tracing::debug!("Loading local config from: {:?}", local_config_path);
            config = Self::merge_from_file(config, &local_config_path)?;
        }

        config = Self::apply_env_overrides(config)?;

        tracing::debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a specific file path
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. Custom config file (specified path)
    /// 3. Environment variables
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from custom path: {:?}", path);

        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        let config = Self::merge_from_file(Self::default(), path)?;
        Self::apply_env_overrides(config)
    }

    /// Get the system config path: ~/.config/profilekit/config.toml
    pub fn system_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("profilekit").join("config.toml"))
    }

    /// Get the local config path: ./profilekit.toml
    fn local_config_path() -> PathBuf {
        PathBuf::from("./profilekit.toml")
    }

    /// Load and merge configuration from a TOML file
    fn merge_from_file(base: Self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let overlay: toml::Value = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Self::merge(base, overlay)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Overlay only the keys present in `overlay`; everything else keeps
    /// the value from `base`.
    fn merge(base: Self, overlay: toml::Value) -> Result<Self> {
        let mut merged = toml::Value::try_from(&base)?;
        merge_values(&mut merged, overlay);
        let config: Self = merged.try_into()?;
        Ok(config)
    }

    fn apply_env_overrides(config: Self) -> Result<Self> {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok())
    }

    /// Apply `PROFILEKIT_*` overrides using `lookup` to read variables
    fn apply_overrides_from<F>(mut config: Self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(latency) = lookup("PROFILEKIT_LATENCY_MS") {
            config.simulation.latency_ms = latency
                .trim()
                .parse()
                .with_context(|| format!("Invalid PROFILEKIT_LATENCY_MS: {}", latency))?;
        }

        if let Some(level) = lookup("PROFILEKIT_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("PROFILEKIT_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        if let Some(json) = lookup("PROFILEKIT_LOG_JSON") {
            config.logging.json = matches!(
                json.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(tick) = lookup("PROFILEKIT_TICK_MS") {
            config.ui.tick_rate_ms = tick
                .trim()
                .parse()
                .with_context(|| format!("Invalid PROFILEKIT_TICK_MS: {}", tick))?;
        }

        if let Some(accent) = lookup("PROFILEKIT_ACCENT") {
            config.ui.accent = accent.parse().map_err(anyhow::Error::msg)?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        tracing::debug!("Validating configuration...");

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            );
        }

        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("ui.tick_rate_ms must be greater than zero");
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::info!("Configuration saved to: {:?}", path);
        Ok(())
    }
}

fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
