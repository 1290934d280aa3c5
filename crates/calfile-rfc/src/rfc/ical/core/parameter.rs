//! iCalendar parameter types (RFC 5545 §3.2).

/// A single property parameter.
///
/// For example: `DTSTART;TZID=America/New_York:20260123T120000`
/// carries a parameter with name `TZID` and value `America/New_York`.
///
/// The value is kept verbatim apart from surrounding double quotes, so
/// list-valued parameters such as `MEMBER="a","b"` are not re-split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value.
    pub value: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }
}
