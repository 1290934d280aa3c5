pub mod cli;
pub mod error;
pub mod fetch;
pub mod output;

use calfile_core::config::Settings;
use calfile_rfc::rfc::ical::parse::parse;

use crate::error::AppResult;

/// ## Summary
/// Fetches `source`, parses it and renders the events as configured.
///
/// ## Errors
/// Returns an error if the source cannot be read, the document cannot be
/// parsed, or the result cannot be rendered.
#[tracing::instrument(skip(settings))]
pub async fn process(source: &str, settings: &Settings) -> AppResult<String> {
    let text = fetch::fetch(source, &settings.source.base_path).await?;
    let calendar = parse(&text, settings.parser.timezone.as_deref())?;

    tracing::info!(events = calendar.len(), "Calendar parsed");

    output::render(&calendar, settings.output.format)
}
