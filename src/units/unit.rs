use crate::units::catalog::{spec_of, UnitSpec};
use crate::units::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every unit known to the catalog
///
/// Discriminants index the catalog table, so variants are grouped by category
/// in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    // Distance
    Meters,
    Kilometers,
    Feet,
    Yards,
    Miles,
    // Mass
    Grams,
    Kilograms,
    Ounces,
    Pounds,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Time
    Hours,
    Minutes,
    Seconds,
}

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// value_in_base = value * factor
    Linear { factor: f64 },
    /// value_in_base = value * scale + offset
    Affine { scale: f64, offset: f64 },
}

impl ConversionRule {
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } => value * factor,
            ConversionRule::Affine { scale, offset } => value * scale + offset,
        }
    }

    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { factor } => value / factor,
            ConversionRule::Affine { scale, offset } => (value - offset) / scale,
        }
    }
}

impl Unit {
    pub(crate) fn spec(&self) -> &'static UnitSpec {
        spec_of(*self)
    }

    pub fn category(&self) -> Category {
        self.spec().category
    }

    /// Short symbol, e.g. "mi"
    pub fn symbol(&self) -> &'static str {
        self.spec().symbol
    }

    /// Long display name for a quantity of exactly one
    pub fn singular(&self) -> &'static str {
        self.spec().singular
    }

    /// Long display name for any other quantity
    pub fn plural(&self) -> &'static str {
        self.spec().plural
    }

    pub fn rule(&self) -> ConversionRule {
        self.spec().rule
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.rule().to_base(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.rule().from_base(value)
    }

    pub fn belongs_to(&self, category: Category) -> bool {
        self.category() == category
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}
