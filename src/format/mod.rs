pub mod formatter;
pub mod locale;

pub use formatter::{format, FormatOptions, UnitFormatter, UnitStyle, MAX_FRACTION_DIGITS};
pub use locale::NumberLocale;
