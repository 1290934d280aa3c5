//! Timezone resolution for date-typed properties.

mod timezone;

pub use timezone::{ConversionError, TimeZoneResolver, localize};
