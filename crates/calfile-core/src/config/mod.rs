use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::CoreError;

const ENV_PREFIX: &str = "CALFILE";
const CONFIG_FILE: &str = "calfile";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub base_path: PathBuf,
    pub file_name: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./"),
            file_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    /// Target timezone every parsed date is expressed in.
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Shape of the text handed back to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    #[serde(alias = "array")]
    Native,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "array" => Ok(Self::Native),
            "json" => Ok(Self::Json),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format '{other}', expected 'native' or 'json'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `calfile.toml`.
    /// Environment variables (`CALFILE__SECTION__KEY`) take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match `Settings`.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("source.base_path", "./")?
            .set_default("output.format", OutputFormat::default().as_str())?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
