//! Property value types.

use serde::ser::{Serialize, Serializer};

use super::ResolvedDateTime;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// Text value.
    Text(String),
    /// Date or date-time value resolved against a timezone.
    DateTime(ResolvedDateTime),
}

impl Scalar {
    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::DateTime(_) => None,
        }
    }

    /// Returns the value as a date-time if it is one.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&ResolvedDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::Text(_) => None,
        }
    }

    fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        match self {
            Self::Text(s) => Self::Text(f(&s)),
            other @ Self::DateTime(_) => other,
        }
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<ResolvedDateTime> for Scalar {
    fn from(dt: ResolvedDateTime) -> Self {
        Self::DateTime(dt)
    }
}

/// A stored property value: one scalar, or a flat list of scalars when the
/// property repeats or carries several comma-separated dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl PropertyValue {
    /// Merges a newly stored value into this (previously stored) one.
    ///
    /// Order is always existing first, then incoming:
    /// - list + list: concatenation
    /// - list + scalar: scalar appended
    /// - scalar + list: scalar prepended
    /// - scalar + scalar: two-element list
    #[must_use]
    pub fn merge(self, incoming: Self) -> Self {
        match (self, incoming) {
            (Self::List(mut existing), Self::List(new)) => {
                existing.extend(new);
                Self::List(existing)
            }
            (Self::List(mut existing), Self::Scalar(new)) => {
                existing.push(new);
                Self::List(existing)
            }
            (Self::Scalar(existing), Self::List(new)) => {
                let mut merged = Vec::with_capacity(new.len() + 1);
                merged.push(existing);
                merged.extend(new);
                Self::List(merged)
            }
            (Self::Scalar(existing), Self::Scalar(new)) => Self::List(vec![existing, new]),
        }
    }

    /// Returns the single scalar, if this is not a list.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the scalar text, if this is a single text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_text)
    }

    /// Returns the scalar date-time, if this is a single date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&ResolvedDateTime> {
        self.as_scalar().and_then(Scalar::as_datetime)
    }

    /// Returns the list elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }

    /// Returns all scalars: one for a scalar, every element for a list.
    #[must_use]
    pub fn scalars(&self) -> &[Scalar] {
        match self {
            Self::Scalar(s) => std::slice::from_ref(s),
            Self::List(items) => items,
        }
    }

    /// Applies `f` to every text scalar, leaving date-times untouched.
    #[must_use]
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(s.map_text(f)),
            Self::List(items) => Self::List(items.into_iter().map(|s| s.map_text(&f)).collect()),
        }
    }
}

impl From<Scalar> for PropertyValue {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => dt.serialize(serializer),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(s) => s.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}
