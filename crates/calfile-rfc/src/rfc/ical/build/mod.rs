//! iCalendar text output helpers.

mod escape;

pub use escape::escape_text;
