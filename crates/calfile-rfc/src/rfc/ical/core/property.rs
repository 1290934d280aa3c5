//! Content line type (RFC 5545 §3.1).

use super::Parameter;

/// A raw content line as split from the document text.
///
/// This is the low-level representation before any value handling: the
/// value has been unfolded but not unescaped or interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance. Duplicates are kept.
    pub params: Vec<Parameter>,
    /// Raw value string.
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a new content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Creates a content line with parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            raw_value: value.into(),
        }
    }

    /// Returns the last parameter with the given name.
    ///
    /// When a parameter is repeated the last occurrence wins.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .rev()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).map(|p| p.value.as_str())
    }

    /// Returns the TZID parameter if present.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value("TZID")
    }

    /// Returns whether this line is `<marker>:<component>` (case-insensitive).
    #[must_use]
    pub fn is_marker(&self, marker: &str, component: &str) -> bool {
        self.name == marker && self.raw_value.eq_ignore_ascii_case(component)
    }
}
