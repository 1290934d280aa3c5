//! Event accumulation: alarm context tracking and value aggregation.

use super::values::unescape_text;
use crate::rfc::ical::core::{ALARMS_KEY, Alarm, ContentLine, Event, PropertyMap, PropertyValue};

const ALARM_COMPONENT: &str = "VALARM";

/// Which accumulator receives stored properties.
#[derive(Debug)]
enum Context {
    InEvent,
    InAlarm(PropertyMap),
}

/// Accumulates the properties of one VEVENT block.
///
/// `BEGIN:VALARM` opens a fresh alarm accumulator and `END:VALARM` closes it
/// onto the event's alarm list; both markers are consumed. Everything else is
/// stored in whichever accumulator is active.
#[derive(Debug)]
pub struct EventBuilder {
    properties: PropertyMap,
    alarms: Vec<Alarm>,
    context: Context,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: PropertyMap::new(),
            alarms: Vec::new(),
            context: Context::InEvent,
        }
    }

    /// Handles `BEGIN:VALARM`/`END:VALARM`.
    ///
    /// Returns `true` when the line was a marker and has been consumed.
    pub fn apply_marker(&mut self, line: &ContentLine) -> bool {
        if line.is_marker("BEGIN", ALARM_COMPONENT) {
            if let Context::InAlarm(open) = &self.context {
                tracing::warn!(
                    properties = open.len(),
                    "Nested BEGIN:VALARM, discarding the open alarm"
                );
            }
            self.context = Context::InAlarm(PropertyMap::new());
            return true;
        }

        if line.is_marker("END", ALARM_COMPONENT) {
            match std::mem::replace(&mut self.context, Context::InEvent) {
                Context::InAlarm(alarm) => self.alarms.push(Alarm::new(alarm)),
                Context::InEvent => tracing::debug!("Ignoring END:VALARM outside an alarm"),
            }
            return true;
        }

        false
    }

    /// Stores a value in the active accumulator, merging repeated names.
    ///
    /// The event-level `VALARM` key is reserved for the alarm list, so a
    /// property of that name outside an alarm is dropped.
    pub fn store(&mut self, name: impl Into<String>, value: PropertyValue) {
        let name = name.into();
        match &mut self.context {
            Context::InEvent if name.eq_ignore_ascii_case(ALARMS_KEY) => {
                tracing::debug!("Dropping {ALARMS_KEY} property, the key holds the alarm list");
            }
            Context::InEvent => self.properties.insert(name, value),
            Context::InAlarm(alarm) => alarm.insert(name, value),
        }
    }

    #[cfg(test)]
    const fn in_alarm(&self) -> bool {
        matches!(self.context, Context::InAlarm(_))
    }

    /// Finishes the event, unescaping every text value.
    ///
    /// An alarm still open at this point is discarded.
    #[must_use]
    pub fn finish(self) -> Event {
        if let Context::InAlarm(open) = &self.context {
            tracing::warn!(
                properties = open.len(),
                "Discarding unterminated VALARM at end of event"
            );
        }

        let properties = self.properties.map_text(unescape_text);
        let alarms = self
            .alarms
            .into_iter()
            .map(|alarm| Alarm::new(alarm.into_properties().map_text(unescape_text)))
            .collect();

        Event::new(properties, alarms)
    }
}
