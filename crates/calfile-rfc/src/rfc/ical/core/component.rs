//! Extracted event and alarm types.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::PropertyValue;

/// Key under which an event's alarms are exposed in serialized output.
pub const ALARMS_KEY: &str = "VALARM";

/// Property values keyed by bare property name, in order of first appearance.
///
/// Storing a name twice never overwrites: the values are merged with
/// [`PropertyValue::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
}

impl PropertyMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores a value, merging with any value already stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        let name = name.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            let existing = std::mem::replace(slot, PropertyValue::List(Vec::new()));
            *slot = existing.merge(value);
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value stored under `name` (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the property names in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `f` to every text scalar in the map.
    #[must_use]
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, value.map_text(&f)))
                .collect(),
        }
    }

    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        Ok(())
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        self.serialize_entries(&mut map)?;
        map.end()
    }
}

/// A VALARM block nested inside an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alarm {
    properties: PropertyMap,
}

impl Alarm {
    #[must_use]
    pub const fn new(properties: PropertyMap) -> Self {
        Self { properties }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    #[must_use]
    pub const fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    #[must_use]
    pub fn into_properties(self) -> PropertyMap {
        self.properties
    }
}

impl Serialize for Alarm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.properties.serialize(serializer)
    }
}

/// One VEVENT block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    properties: PropertyMap,
    alarms: Vec<Alarm>,
}

impl Event {
    #[must_use]
    pub const fn new(properties: PropertyMap, alarms: Vec<Alarm>) -> Self {
        Self { properties, alarms }
    }

    /// Returns the event property stored under `name`.
    ///
    /// Alarm properties are never visible here; use [`Event::alarms`].
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    #[must_use]
    pub const fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    #[must_use]
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len() + 1))?;
        self.properties.serialize_entries(&mut map)?;
        map.serialize_entry(ALARMS_KEY, &self.alarms)?;
        map.end()
    }
}

/// The events recovered from one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCalendar {
    events: Vec<Event>,
}

impl ParsedCalendar {
    #[must_use]
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a ParsedCalendar {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl Serialize for ParsedCalendar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.events.serialize(serializer)
    }
}
