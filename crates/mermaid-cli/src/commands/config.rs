//! Config command implementation.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/mermaid-ink/config.toml`
//! - macOS: `~/Library/Application Support/mermaid-ink/config.toml`
//! - Windows: `%APPDATA%\mermaid-ink\config.toml`

use crate::actions::ConfigAction;
use crate::exit::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use mermaid_ink_core::{
    ConverterConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OutputFormat, Theme,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// CLI configuration.
///
/// Every table and key is optional; missing values take their defaults.
///
/// # Examples
///
/// ```toml
/// [service]
/// base_url = "https://mermaid.ink"
/// timeout_seconds = 30
///
/// [defaults]
/// format = "svg"
/// theme = "dark"
/// background_color = "!white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Rendering service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Default rendering options
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Rendering service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service root URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Default rendering options, used when the matching flag is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output format
    pub format: String,

    /// Theme for raster output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default().as_str().to_string(),
            theme: None,
            background_color: None,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key.
    pub fn validate(&self) -> Result<()> {
        self.converter_config(None, None)
            .validate()
            .context("invalid [service] table")?;

        self.defaults
            .format
            .parse::<OutputFormat>()
            .context("invalid defaults.format")?;

        if let Some(theme) = &self.defaults.theme {
            theme.parse::<Theme>().context("invalid defaults.theme")?;
        }

        Ok(())
    }

    /// Builds a converter configuration, letting flags override file values.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_cli::commands::config::Config;
    ///
    /// let config = Config::default().converter_config(Some("http://localhost:3000"), Some(5));
    /// assert_eq!(config.base_url, "http://localhost:3000");
    /// assert_eq!(config.timeout.as_secs(), 5);
    /// ```
    #[must_use]
    pub fn converter_config(&self, base_url: Option<&str>, timeout: Option<u64>) -> ConverterConfig {
        ConverterConfig::builder()
            .base_url(base_url.unwrap_or(&self.service.base_url))
            .timeout(Duration::from_secs(
                timeout.unwrap_or(self.service.timeout_seconds),
            ))
            .build()
    }

    /// Loads configuration from `path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content).context("failed to parse config file")?;
        config.validate()?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        fs::write(path, self.to_toml()?).context("failed to write config file")?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Gets the default configuration file path.
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("mermaid-ink").join("config.toml"))
}

/// Resolves the configuration path, preferring an explicit `--config`.
///
/// # Errors
///
/// Returns an error if no path was given and the default cannot be determined.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit.map_or_else(default_config_path, Ok)
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or written.
pub async fn run(action: ConfigAction, path: &Path) -> Result<ExitCode> {
    info!("Config action: {:?}", action);

    match action {
        ConfigAction::Show => {
            let config = Config::load(path)?;
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Init { force } => init_config(path, force),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Writes a default configuration file unless one already exists.
fn init_config(path: &Path, force: bool) -> Result<ExitCode> {
    if path.exists() && !force {
        eprintln!(
            "{} Config file already exists at {} (use --force to overwrite)",
            "✗".red(),
            path.display()
        );
        return Ok(ExitCode::ERROR);
    }

    Config::default().save(path)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(ExitCode::SUCCESS)
}
