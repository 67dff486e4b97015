// Unit catalog: the fixed categories, their ordered units and conversion rules

pub mod catalog;
pub mod category;
pub mod detector;
pub mod unit;

pub use catalog::{base_unit, default_pair, lookup_unit, units_for};
pub use category::Category;
pub use detector::{looks_like_quantity, parse_quantity};
pub use unit::{ConversionRule, Unit};
