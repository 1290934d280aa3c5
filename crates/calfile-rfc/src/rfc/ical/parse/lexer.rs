//! Content line lexer (RFC 5545 §3.1).
//!
//! Handles line ending normalization, unfolding, and splitting content lines
//! into name, parameters and raw value.

use super::flatten::split_flattened;
use crate::rfc::ical::core::{ContentLine, Parameter};

/// Normalizes line endings and unfolds continuation lines.
///
/// `\r\n` and bare `\r` both become `\n`. A line starting with a single
/// SPACE or HTAB continues the previous line: the line break and that one
/// whitespace character are removed, nothing is inserted in their place.
#[must_use]
pub fn unfold(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut result = String::with_capacity(normalized.len());
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' && matches!(chars.peek(), Some(' ' | '\t')) {
            // Fold: skip the line break and the whitespace
            chars.next();
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits unfolded text into logical lines.
///
/// Empty lines are dropped. Continuation lines that survived unfolding (for
/// example when the caller skipped [`unfold`]) are still merged into the
/// previous line.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t'])
            && let Some(prev) = lines.last_mut()
        {
            prev.push_str(continuation);
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Returns whether a whole unfolded document sits on a single physical line.
///
/// Such a document was flattened by whatever produced it and needs
/// [`split_flattened`] to recover its line boundaries.
#[must_use]
pub fn is_flattened(document: &str) -> bool {
    let trimmed = document.trim();
    !trimmed.is_empty() && !trimmed.contains('\n')
}

/// Produces the logical lines of one block of unfolded text.
///
/// `flattened` is decided once for the whole document with [`is_flattened`]:
/// a block of a multi-line document is always split on line breaks, even
/// when it holds a single property.
#[must_use]
pub fn logical_lines(input: &str, flattened: bool) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if flattened {
        split_flattened(trimmed)
    } else {
        split_lines(trimmed)
    }
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// The line is split at the first `:` outside double quotes; everything after
/// it, further colons included, is the raw value. A line without any `:` is
/// kept as a property with an empty value. Returns `None` for blank lines.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    if line.trim().is_empty() {
        return None;
    }

    let (head, value) = match find_unquoted(line, ':') {
        Some(colon) => (&line[..colon], &line[colon + 1..]),
        None => (line, ""),
    };

    let (name, params) = match find_unquoted(head, ';') {
        Some(semi) => (&head[..semi], parse_parameters(&head[semi + 1..])),
        None => (head, Vec::new()),
    };

    Some(ContentLine::with_params(name.trim(), params, value.trim()))
}

/// Parses the `;`-separated parameter list following the property name.
fn parse_parameters(input: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut rest = input;

    loop {
        let (segment, next) = match find_unquoted(rest, ';') {
            Some(semi) => (&rest[..semi], Some(&rest[semi + 1..])),
            None => (rest, None),
        };

        if !segment.trim().is_empty() {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            params.push(Parameter::new(name.trim(), unquote(value.trim())));
        }

        match next {
            Some(next) => rest = next,
            None => break,
        }
    }

    params
}

/// Finds the byte offset of the first `needle` that is not inside double quotes.
fn find_unquoted(input: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in input.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == needle && !in_quotes {
            return Some(i);
        }
    }
    None
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_simple() {
        let input = "DESCRIPTION:This is a long description\r\n that continues here";
        let result = unfold(input);
        assert_eq!(
            result,
            "DESCRIPTION:This is a long descriptionthat continues here"
        );
    }

    #[test]
    fn unfold_multiple() {
        let input = "DESCRIPTION:First\r\n Second\r\n\tThird";
        let result = unfold(input);
        assert_eq!(result, "DESCRIPTION:FirstSecondThird");
    }

    #[test]
    fn unfold_bare_cr_and_lf() {
        assert_eq!(unfold("A:1\rB:2\nC:3"), "A:1\nB:2\nC:3");
        assert_eq!(unfold("DESCRIPTION:First\r Second"), "DESCRIPTION:FirstSecond");
    }

    #[test]
    fn unfold_removes_only_one_whitespace() {
        assert_eq!(unfold("SUMMARY:a\r\n  b"), "SUMMARY:a b");
    }

    #[test]
    fn unfold_keeps_multibyte_characters() {
        assert_eq!(unfold("SUMMARY:Caf\r\n é ünïcödé"), "SUMMARY:Café ünïcödé");
    }

    #[test]
    fn split_lines_skips_empty_and_merges_continuations() {
        let lines = split_lines("SUMMARY:Hello\n\n world\n   \nUID:1\n");
        assert_eq!(lines, ["SUMMARY:Helloworld", "UID:1"]);
    }

    #[test]
    fn logical_lines_uses_newlines_when_present() {
        let lines = logical_lines("\nSUMMARY:Hello world\nUID:1\n", false);
        assert_eq!(lines, ["SUMMARY:Hello world", "UID:1"]);
    }

    #[test]
    fn logical_lines_splits_flattened_text() {
        let lines = logical_lines("SUMMARY:Hello world UID:1", true);
        assert_eq!(lines, ["SUMMARY:Hello world", "UID:1"]);
    }

    #[test]
    fn single_property_block_of_multi_line_document_is_not_resegmented() {
        let lines = logical_lines("\nSUMMARY:Call NASA: today\n", false);
        assert_eq!(lines, ["SUMMARY:Call NASA: today"]);
    }

    #[test]
    fn logical_lines_empty_input() {
        assert!(logical_lines("  \n ", false).is_empty());
        assert!(logical_lines("   ", true).is_empty());
    }

    #[test]
    fn flattened_detection() {
        assert!(is_flattened("BEGIN:VEVENT SUMMARY:x END:VEVENT"));
        assert!(is_flattened("  BEGIN:VEVENT SUMMARY:x END:VEVENT\n"));
        assert!(!is_flattened("BEGIN:VEVENT\nSUMMARY:x\nEND:VEVENT"));
        assert!(!is_flattened(""));
    }

    #[test]
    fn parse_simple_line() {
        let result = parse_content_line("SUMMARY:Team Meeting").expect("non-empty");
        assert_eq!(result.name, "SUMMARY");
        assert!(result.params.is_empty());
        assert_eq!(result.raw_value, "Team Meeting");
    }

    #[test]
    fn parse_line_with_params() {
        let result =
            parse_content_line("DTSTART;TZID=America/New_York:20260123T120000").expect("line");
        assert_eq!(result.name, "DTSTART");
        assert_eq!(result.params.len(), 1);
        assert_eq!(result.params[0].name, "TZID");
        assert_eq!(result.params[0].value, "America/New_York");
        assert_eq!(result.raw_value, "20260123T120000");
    }

    #[test]
    fn parse_line_keeps_colons_in_value() {
        let result = parse_content_line("URL:https://example.com:8080/a").expect("line");
        assert_eq!(result.name, "URL");
        assert_eq!(result.raw_value, "https://example.com:8080/a");
    }

    #[test]
    fn parse_line_with_quoted_param() {
        let result =
            parse_content_line("ATTENDEE;CN=\"Doe; Jane: PhD\":mailto:jane@example.com")
                .expect("line");
        assert_eq!(result.name, "ATTENDEE");
        assert_eq!(result.params[0].value, "Doe; Jane: PhD");
        assert_eq!(result.raw_value, "mailto:jane@example.com");
    }

    #[test]
    fn parse_line_keeps_param_value_commas_verbatim() {
        let result = parse_content_line(
            "ATTENDEE;ROLE=REQ-PARTICIPANT,OPT-PARTICIPANT;RSVP=TRUE:mailto:test@example.com",
        )
        .expect("line");
        assert_eq!(result.params.len(), 2);
        assert_eq!(result.params[0].value, "REQ-PARTICIPANT,OPT-PARTICIPANT");
        assert_eq!(result.params[1].name, "RSVP");
        assert_eq!(result.params[1].value, "TRUE");
    }

    #[test]
    fn parse_line_keeps_duplicate_params() {
        let result = parse_content_line("X-FOO;a=1;A=2:v").expect("line");
        assert_eq!(result.params.len(), 2);
        assert_eq!(result.get_param_value("a"), Some("2"));
    }

    #[test]
    fn parse_line_trims_name_and_value() {
        let result = parse_content_line("  summary : padded value  ").expect("line");
        assert_eq!(result.name, "SUMMARY");
        assert_eq!(result.raw_value, "padded value");
    }

    #[test]
    fn parse_line_without_colon_has_empty_value() {
        let result = parse_content_line("GARBAGE").expect("line");
        assert_eq!(result.name, "GARBAGE");
        assert_eq!(result.raw_value, "");
    }

    #[test]
    fn parse_blank_line_is_skipped() {
        assert!(parse_content_line("   ").is_none());
    }
}
