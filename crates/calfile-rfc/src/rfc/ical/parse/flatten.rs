//! Recovery of line boundaries for text flattened onto one physical line.
//!
//! Some producers (and some copy/paste paths) join every content line with a
//! space. The text is split on `:`; for every fragment but the last, the final
//! whitespace-separated token is taken as the name of the next property when
//! it looks like one.
//!
//! Known limitation: a value whose last word is an upper-case token directly
//! followed by a `:` (for example `NOTE IMPORTANT: read`) is split at that
//! word. Values containing a `:` that is not preceded by such a token, such as
//! URLs, are kept intact.

/// Re-segments single-line text into logical content lines.
#[must_use]
pub fn split_flattened(input: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut fragments = input.split(':').peekable();

    let Some(first) = fragments.next() else {
        return lines;
    };

    let mut current = first.trim().to_string();
    if fragments.peek().is_some() {
        current.push(':');
    }

    while let Some(fragment) = fragments.next() {
        let is_last = fragments.peek().is_none();

        if !is_last && let Some((value, next_name)) = split_trailing_name(fragment) {
            current.push_str(value);
            lines.push(std::mem::take(&mut current));
            current.push_str(next_name);
            current.push(':');
            continue;
        }

        current.push_str(fragment);
        if !is_last {
            current.push(':');
        }
    }

    let current = current.trim();
    if !current.is_empty() {
        lines.push(current.to_string());
    }

    tracing::trace!(count = lines.len(), "Re-segmented flattened text");
    lines
}

/// Splits `"value NAME;PARAM=X"` into `("value", "NAME;PARAM=X")` when the
/// trailing token looks like a property name.
fn split_trailing_name(fragment: &str) -> Option<(&str, &str)> {
    let trimmed = fragment.trim_end();
    let start = trimmed.rfind(char::is_whitespace)?;
    let token = trimmed[start..].trim_start();

    is_property_name(token).then_some((trimmed[..start].trim(), token))
}

/// Property names are upper-case letters, digits and `-`, starting with a
/// letter, optionally followed by `;` and parameters.
fn is_property_name(token: &str) -> bool {
    let name = token.split(';').next().unwrap_or(token);
    let mut chars = name.chars();

    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}
