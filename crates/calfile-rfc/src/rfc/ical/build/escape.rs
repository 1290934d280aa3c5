//! TEXT value escaping, the inverse of [`unescape_text`].
//!
//! [`unescape_text`]: crate::rfc::ical::parse::unescape_text

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Escapes backslash, comma, semicolon and line feeds. Every other
/// character, carriage returns included, is kept as-is.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}
