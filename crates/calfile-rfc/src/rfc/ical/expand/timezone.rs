//! Timezone resolution and local-time anchoring for iCalendar date-times.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

/// Error during timezone conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Local time that does not exist in the timezone, even after shifting
    /// past the DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

/// Resolver for timezone identifiers.
///
/// Keeps a cache of resolved timezones. One resolver lives for the duration
/// of a single parse, so concurrent parses never share it.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    /// Cache of resolved IANA timezones by TZID.
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// IANA names are used as-is. Anything else (Windows names, vendor
    /// prefixes, retired aliases) is normalized through ICU first.
    ///
    /// ## Errors
    ///
    /// Returns `ConversionError::UnknownTimezone` if the TZID cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        let tzid = tzid.trim();

        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let tz = Tz::from_str(tzid)
            .or_else(|_| Tz::from_str(&normalize_tzid(tzid)))
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;

        tracing::trace!(tzid, resolved = tz.name(), "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// Normalizes common CalDAV/iCalendar timezone identifiers to IANA names.
///
/// Uses ICU4X for Windows timezone ID mapping and IANA canonicalization.
/// Many calendar clients use non-standard TZID values that need to be
/// mapped to standard IANA timezone names.
fn normalize_tzid(tzid: &str) -> String {
    // Strip common prefixes
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid)
        .trim_matches('"');

    // Windows names first
    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(stripped, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // IANA aliases (Europe/Kiev -> Europe/Kyiv)
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Anchors a wall-clock time to a timezone.
///
/// A time inside a DST fold resolves to the earlier instant. A time inside a
/// DST gap is shifted forward by one hour, matching what most calendar
/// clients display.
///
/// ## Errors
///
/// Returns `ConversionError::NonExistentTime` if the shifted time still does
/// not exist.
pub fn localize(local_time: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, ConversionError> {
    match tz.from_local_datetime(&local_time) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => {
            let shifted = local_time + chrono::Duration::hours(1);
            tz.from_local_datetime(&shifted).earliest().ok_or_else(|| {
                ConversionError::NonExistentTime(format!("{local_time} in timezone {tz}"))
            })
        }
    }
}
