//! iCalendar / vCalendar event extraction (RFC 5545 subset).
//!
//! - `core`: extracted event model (events, alarms, multi-valued properties)
//! - `parse`: the lenient text pipeline producing that model
//! - `expand`: timezone resolution for date-typed properties
//! - `build`: text escaping

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;

#[cfg(test)]
mod tests;
