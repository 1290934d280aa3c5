//! Calendar parsing pipeline.
//!
//! - Lexer: line unfolding and content line splitting
//! - Flatten: line boundary recovery for single-line documents
//! - Extract: VEVENT block extraction
//! - Builder: alarm context tracking and repeated-property aggregation
//! - Values: date/time resolution and text unescaping
//! - Parser: the full document pipeline

mod builder;
mod error;
mod extract;
mod flatten;
mod lexer;
mod parser;
mod values;

pub use builder::EventBuilder;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use extract::{EventBlocks, extract_event_blocks};
pub use flatten::split_flattened;
pub use lexer::{is_flattened, logical_lines, parse_content_line, split_lines, unfold};
pub use parser::parse;
pub use values::{
    DATE_PROPERTIES, TimezoneDefaults, is_date_property, parse_date_values, unescape_text,
};
