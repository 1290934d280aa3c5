//! Rendering parsed calendars for the terminal.

use std::fmt::{self, Write};

use calfile_core::config::OutputFormat;
use calfile_rfc::rfc::ical::core::{ParsedCalendar, PropertyMap, PropertyValue, Scalar};

use crate::error::AppResult;

const INDENT: &str = "  ";

/// ## Summary
/// Renders `calendar` in the requested output format.
///
/// ## Errors
/// Returns an error if the calendar cannot be serialized.
pub fn render(calendar: &ParsedCalendar, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Native => Ok(render_native(calendar)?),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(calendar)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Indented listing of every event, its properties and its alarms.
fn render_native(calendar: &ParsedCalendar) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if calendar.is_empty() {
        writeln!(out, "No events found.")?;
        return Ok(out);
    }

    for (i, event) in calendar.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "Event {}", i + 1)?;
        write_properties(&mut out, event.properties(), 1)?;

        for (j, alarm) in event.alarms().iter().enumerate() {
            writeln!(out, "{INDENT}Alarm {}", j + 1)?;
            write_properties(&mut out, alarm.properties(), 2)?;
        }
    }

    Ok(out)
}

fn write_properties(out: &mut String, properties: &PropertyMap, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);

    for (name, value) in properties.iter() {
        match value {
            PropertyValue::Scalar(scalar) => {
                write!(out, "{pad}{name}: ")?;
                write_scalar(out, scalar, &pad)?;
            }
            PropertyValue::List(items) => {
                writeln!(out, "{pad}{name}:")?;
                for item in items {
                    write!(out, "{pad}{INDENT}- ")?;
                    write_scalar(out, item, &pad)?;
                }
            }
        }
    }

    Ok(())
}

fn write_scalar(out: &mut String, scalar: &Scalar, pad: &str) -> fmt::Result {
    match scalar {
        // Continuation lines of multi-line text hang under the property name.
        Scalar::Text(text) => writeln!(out, "{}", text.replace('\n', &format!("\n{pad}{INDENT}"))),
        Scalar::DateTime(dt) => writeln!(out, "{dt}"),
    }
}
