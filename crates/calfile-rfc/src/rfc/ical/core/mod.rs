//! Extracted calendar model.
//!
//! These types describe what the lenient pipeline recovers from a document:
//! - Content lines split into name, parameters and raw value
//! - Property values that are either a single scalar or a flat list
//! - Events carrying their nested alarms

mod component;
mod datetime;
mod parameter;
mod property;
mod value;

pub use component::{ALARMS_KEY, Alarm, Event, ParsedCalendar, PropertyMap};
pub use datetime::ResolvedDateTime;
pub use parameter::Parameter;
pub use property::ContentLine;
pub use value::{PropertyValue, Scalar};
