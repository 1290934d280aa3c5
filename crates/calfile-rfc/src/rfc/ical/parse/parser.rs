//! Calendar document parser.
//!
//! Turns a raw iCalendar/vCalendar document into the events it contains.

use chrono_tz::Tz;

use super::builder::EventBuilder;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::extract::extract_event_blocks;
use super::lexer::{is_flattened, logical_lines, parse_content_line, unfold};
use super::values::{TimezoneDefaults, is_date_property, parse_date_values};
use crate::rfc::ical::core::{ContentLine, Event, ParsedCalendar, PropertyValue, Scalar};
use crate::rfc::ical::expand::TimeZoneResolver;

/// Calendar-level header naming the document's default timezone.
const DOCUMENT_TIMEZONE: &str = "X-WR-TIMEZONE";

/// Parses a calendar document into its events.
///
/// `target` names the timezone every date is expressed in. Without it, the
/// document's `X-WR-TIMEZONE` is used, and failing that each date stays in
/// the zone it was written in.
///
/// Parsing is lenient: text outside `VEVENT` blocks, blank lines, dates that
/// cannot be parsed and unterminated alarms are skipped. A document without
/// any event yields an empty calendar.
///
/// ## Errors
///
/// - `UnknownTimezone` if `target` is not a known timezone.
/// - `MissingTimezone` if a date property has no `TZID`, no `Z` suffix, and
///   neither `target` nor `X-WR-TIMEZONE` is available.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str, target: Option<&str>) -> ParseResult<ParsedCalendar> {
    tracing::debug!("Parsing calendar document");

    let mut resolver = TimeZoneResolver::new();
    let caller = target
        .map(|tzid| {
            resolver.resolve(tzid).map_err(|e| {
                ParseError::new(ParseErrorKind::UnknownTimezone).with_context(e.to_string())
            })
        })
        .transpose()?;

    let unfolded = unfold(input);
    let flattened = is_flattened(&unfolded);
    if flattened {
        tracing::debug!("No line breaks found, re-segmenting single-line document");
    }
    let extracted = extract_event_blocks(&unfolded);

    let document = document_timezone(&extracted.outside, flattened, &mut resolver);
    let defaults = TimezoneDefaults::new(caller, document);
    tracing::trace!(?defaults, "Timezone defaults");

    let events = extracted
        .blocks
        .iter()
        .enumerate()
        .map(|(i, block)| parse_event(block, i + 1, flattened, defaults, &mut resolver))
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(events = events.len(), "Calendar document parsed");

    Ok(ParsedCalendar::new(events))
}

/// Finds the document's `X-WR-TIMEZONE` in the text outside the event blocks.
///
/// An unknown zone is logged and ignored.
fn document_timezone(
    outside: &[&str],
    flattened: bool,
    resolver: &mut TimeZoneResolver,
) -> Option<Tz> {
    let line = outside
        .iter()
        .flat_map(|segment| logical_lines(segment, flattened))
        .filter_map(|line| parse_content_line(&line))
        .find(|cl| cl.name == DOCUMENT_TIMEZONE && !cl.raw_value.is_empty())?;

    resolver
        .resolve(&line.raw_value)
        .inspect_err(|e| tracing::warn!(error = %e, "Ignoring unknown {DOCUMENT_TIMEZONE}"))
        .ok()
}

/// Builds one event from the contents of a VEVENT block.
fn parse_event(
    block: &str,
    index: usize,
    flattened: bool,
    defaults: TimezoneDefaults,
    resolver: &mut TimeZoneResolver,
) -> ParseResult<Event> {
    let mut builder = EventBuilder::new();

    for line in logical_lines(block, flattened) {
        let Some(content_line) = parse_content_line(&line) else {
            continue;
        };

        if builder.apply_marker(&content_line) {
            continue;
        }

        let value = if is_date_property(&content_line.name) {
            date_value(&content_line, defaults, resolver)
                .map_err(|e| e.at(index, content_line.name.as_str()))?
        } else {
            PropertyValue::Scalar(Scalar::Text(content_line.raw_value))
        };

        builder.store(content_line.name, value);
    }

    let event = builder.finish();
    tracing::trace!(
        index,
        properties = event.properties().len(),
        alarms = event.alarms().len(),
        "Parsed event"
    );
    Ok(event)
}

/// Resolves a date property: one date is a scalar, several are a list.
///
/// When no component can be parsed the raw text is kept instead.
fn date_value(
    line: &ContentLine,
    defaults: TimezoneDefaults,
    resolver: &mut TimeZoneResolver,
) -> ParseResult<PropertyValue> {
    let mut dates = parse_date_values(line, defaults, resolver)?;

    Ok(match dates.len() {
        0 => PropertyValue::Scalar(Scalar::Text(line.raw_value.clone())),
        1 => PropertyValue::Scalar(Scalar::DateTime(dates.remove(0))),
        _ => PropertyValue::List(dates.into_iter().map(Scalar::DateTime).collect()),
    })
}
