//! Command-line interface.

use std::path::PathBuf;

use calfile_core::config::{OutputFormat, Settings};
use calfile_core::error::CoreError;
use clap::Parser;

/// Extract the events of an iCalendar/vCalendar document.
#[derive(Debug, Parser)]
#[command(name = "calfile", version)]
#[command(about = "Extract events, alarms and resolved dates from an iCalendar file or URL")]
pub struct Cli {
    /// File path or http(s) URL of the calendar. Defaults to `source.file_name`.
    pub source: Option<String>,

    /// Output format (native or json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Timezone every date is converted to (e.g. "Europe/Berlin")
    #[arg(short, long)]
    pub timezone: Option<String>,

    /// Directory relative file paths are resolved against
    #[arg(long)]
    pub base_path: Option<PathBuf>,
}

impl Cli {
    /// Layers the command-line flags over the loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if let Some(timezone) = &self.timezone {
            settings.parser.timezone = Some(timezone.clone());
        }
        if let Some(base_path) = &self.base_path {
            settings.source.base_path.clone_from(base_path);
        }
    }

    /// ## Summary
    /// The calendar to read: the positional argument, else the configured file name.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` when neither is set.
    pub fn source(&self, settings: &Settings) -> Result<String, CoreError> {
        self.source
            .clone()
            .or_else(|| settings.source.file_name.clone())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                CoreError::ConfigError(
                    "no calendar source given and source.file_name is not set".to_string(),
                )
            })
    }
}
