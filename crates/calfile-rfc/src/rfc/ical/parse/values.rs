//! Value handling: text unescaping and date/date-time resolution.

use chrono::NaiveDateTime;
use chrono_tz::Tz;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{ContentLine, ResolvedDateTime};
use crate::rfc::ical::expand::{TimeZoneResolver, localize};

/// Properties whose values are resolved to [`ResolvedDateTime`]s.
pub const DATE_PROPERTIES: [&str; 6] = [
    "DTSTART",
    "DTEND",
    "DTSTAMP",
    "CREATED",
    "EXDATE",
    "LAST-MODIFIED",
];

const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Returns whether `name` (a bare, upper-case property name) is date-typed.
#[must_use]
pub fn is_date_property(name: &str) -> bool {
    DATE_PROPERTIES.contains(&name)
}

/// Timezones a date property falls back on when it names none itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimezoneDefaults {
    /// Zone for values without `TZID` or `Z`: the document's
    /// `X-WR-TIMEZONE`, else the caller's target.
    pub ambient: Option<Tz>,
    /// Zone every resolved value is expressed in: the caller's target, else
    /// the document's `X-WR-TIMEZONE`. Without either, values stay in their
    /// source zone.
    pub target: Option<Tz>,
}

impl TimezoneDefaults {
    /// Combines the caller's target zone with the document's declared zone.
    #[must_use]
    pub fn new(caller: Option<Tz>, document: Option<Tz>) -> Self {
        Self {
            ambient: document.or(caller),
            target: caller.or(document),
        }
    }
}

/// Resolves the value of a date-typed property.
///
/// The raw value may hold several comma-separated components (`EXDATE`).
/// Each is parsed as `YYYYMMDD"T"HHMMSS[Z]`, or `YYYYMMDD` when date-only,
/// anchored to its source zone and converted to the target zone. Components
/// that cannot be parsed or anchored are dropped.
///
/// Source zone, in order of precedence: a trailing `Z` (UTC), the `TZID`
/// parameter, then [`TimezoneDefaults::ambient`].
///
/// ## Errors
/// Returns `MissingTimezone` if a component needs the ambient zone and there
/// is none.
pub fn parse_date_values(
    line: &ContentLine,
    defaults: TimezoneDefaults,
    resolver: &mut TimeZoneResolver,
) -> ParseResult<Vec<ResolvedDateTime>> {
    let declared_date_only = line
        .get_param("VALUE")
        .is_some_and(|p| p.has_value("DATE"));

    let mut resolved = Vec::new();
    for component in line.raw_value.split(',').map(str::trim) {
        if component.is_empty() {
            continue;
        }

        let Some(source) = source_timezone(line, component, defaults, resolver)? else {
            continue;
        };

        let date_only = declared_date_only || looks_like_date(component);
        let Some(value) = resolve_component(component, date_only, source, defaults.target) else {
            tracing::debug!(
                property = %line.name,
                value = component,
                "Dropping unparseable date component"
            );
            continue;
        };
        resolved.push(value);
    }

    Ok(resolved)
}

/// Determines the zone a component was written in.
///
/// `Ok(None)` means the named zone is unknown and the component is skipped.
fn source_timezone(
    line: &ContentLine,
    component: &str,
    defaults: TimezoneDefaults,
    resolver: &mut TimeZoneResolver,
) -> ParseResult<Option<Tz>> {
    if component.ends_with(['Z', 'z']) {
        return Ok(Some(Tz::UTC));
    }

    if let Some(tzid) = line.tzid() {
        return Ok(match resolver.resolve(tzid) {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!(property = %line.name, error = %e, "Skipping date with unknown TZID");
                None
            }
        });
    }

    defaults.ambient.map(Some).ok_or_else(|| {
        ParseError::new(ParseErrorKind::MissingTimezone)
            .with_context(format!("value '{component}' has no TZID and no default timezone"))
    })
}

fn resolve_component(
    component: &str,
    date_only: bool,
    source: Tz,
    target: Option<Tz>,
) -> Option<ResolvedDateTime> {
    let stripped = component.trim_end_matches(['Z', 'z']);
    // A date-only value is always local midnight; a time of day makes it unparseable.
    let text = if date_only {
        format!("{stripped}T000000")
    } else {
        stripped.to_string()
    };

    let naive = NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT).ok()?;
    let local = localize(naive, source)
        .inspect_err(|e| tracing::debug!(error = %e, "Cannot anchor local time"))
        .ok()?;
    let instant = local.with_timezone(&target.unwrap_or(source));

    Some(ResolvedDateTime::new(instant, source, date_only))
}

/// A bare `YYYYMMDD` component is a date even without `VALUE=DATE`.
fn looks_like_date(component: &str) -> bool {
    component.len() == 8 && component.bytes().all(|b| b.is_ascii_digit())
}

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// Resolves `\\`, `\;`, `\,` and `\n`/`\N`. Unknown escapes are preserved
/// as-is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    // Invalid escape, preserve as-is
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod tests;
