//! VEVENT block extraction.

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// The event blocks of a document and the text around them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventBlocks<'a> {
    /// Block contents between `BEGIN:VEVENT` and `END:VEVENT`, markers excluded.
    pub blocks: Vec<&'a str>,
    /// Trimmed, non-empty text segments outside the blocks (calendar-level
    /// headers, VTIMEZONE, ...), in document order.
    pub outside: Vec<&'a str>,
}

/// Scans for `BEGIN:VEVENT … END:VEVENT` spans.
///
/// Matching is case-insensitive and non-greedy: each block ends at the first
/// `END:VEVENT` after its `BEGIN:VEVENT`. A `BEGIN:VEVENT` without a matching
/// end marker does not form a block and is left in the outside text.
#[must_use]
pub fn extract_event_blocks(text: &str) -> EventBlocks<'_> {
    // ASCII upper-casing keeps byte offsets identical to `text`.
    let upper = text.to_ascii_uppercase();
    let mut blocks = Vec::new();
    let mut outside = Vec::new();
    let mut pos = 0;

    while let Some(begin) = upper[pos..].find(BEGIN_EVENT).map(|i| pos + i) {
        let body_start = begin + BEGIN_EVENT.len();
        let Some(body_end) = upper[body_start..].find(END_EVENT).map(|i| body_start + i) else {
            break;
        };

        push_outside(&mut outside, &text[pos..begin]);
        blocks.push(&text[body_start..body_end]);
        pos = body_end + END_EVENT.len();
    }
    push_outside(&mut outside, &text[pos..]);

    tracing::debug!(count = blocks.len(), "Extracted VEVENT blocks");
    EventBlocks { blocks, outside }
}

fn push_outside<'a>(outside: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        outside.push(segment);
    }
}
