//! Parsing error types.
//!
//! The pipeline is lenient: malformed lines, unparseable dates and dangling
//! alarms are recovered from silently. Only conditions that leave no sensible
//! way to express a date surface as errors.

use std::fmt;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Index of the VEVENT block the error occurred in (1-based).
    pub event: Option<usize>,
    /// Property being resolved when the error occurred.
    pub property: Option<String>,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub const fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            event: None,
            property: None,
            context: None,
        }
    }

    /// Records the event and property the error belongs to.
    #[must_use]
    pub fn at(mut self, event: usize, property: impl Into<String>) -> Self {
        self.event = Some(event);
        self.property = Some(property.into());
        self
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(event) = self.event {
            write!(f, " in event {event}")?;
        }
        if let Some(ref property) = self.property {
            write!(f, ", property {property}")?;
        }
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A date property needs a timezone and neither the document nor the
    /// caller provides one.
    MissingTimezone,
    /// The caller-supplied target timezone is not a known zone.
    UnknownTimezone,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTimezone => write!(f, "no timezone set or found"),
            Self::UnknownTimezone => write!(f, "unknown timezone"),
        }
    }
}
