//! Resolved date-time values.

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// A point in time read in its source timezone and re-expressed in the
/// target timezone.
///
/// Date-only values are anchored to local midnight in the source timezone
/// before conversion, so `instant` may fall on the previous or next day once
/// expressed in a different target zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDateTime {
    instant: DateTime<Tz>,
    source: Tz,
    date_only: bool,
}

impl ResolvedDateTime {
    #[must_use]
    pub const fn new(instant: DateTime<Tz>, source: Tz, date_only: bool) -> Self {
        Self {
            instant,
            source,
            date_only,
        }
    }

    /// The instant expressed in the target timezone.
    #[must_use]
    pub const fn instant(&self) -> &DateTime<Tz> {
        &self.instant
    }

    /// The timezone the value was written in.
    #[must_use]
    pub const fn source_timezone(&self) -> Tz {
        self.source
    }

    /// The timezone the instant is expressed in.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.instant.timezone()
    }

    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        self.date_only
    }
}

impl fmt::Display for ResolvedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.instant.format("%Y-%m-%d %H:%M:%S"),
            self.instant.timezone().name()
        )
    }
}

impl Serialize for ResolvedDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedDateTime", 4)?;
        state.serialize_field(
            "date",
            &self.instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        state.serialize_field("timezone", self.instant.timezone().name())?;
        state.serialize_field("source_timezone", self.source.name())?;
        state.serialize_field("date_only", &self.date_only)?;
        state.end()
    }
}
