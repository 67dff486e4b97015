// Static unit catalog: category -> ordered units -> conversion rule to the base unit

use crate::convert::error::ConvertError;
use crate::units::category::Category;
use crate::units::unit::{ConversionRule, Unit};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// One row of the catalog table
#[derive(Debug)]
pub struct UnitSpec {
    pub unit: Unit,
    pub category: Category,
    pub symbol: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Extra names accepted by `lookup_unit`
    pub aliases: &'static [&'static str],
    pub rule: ConversionRule,
}

const fn linear(factor: f64) -> ConversionRule {
    ConversionRule::Linear { factor }
}

const FAHRENHEIT_SCALE: f64 = 5.0 / 9.0;

// Indexed by `Unit as usize`
static UNIT_TABLE: [UnitSpec; 15] = [
    UnitSpec {
        unit: Unit::Meters,
        category: Category::Distance,
        symbol: "m",
        singular: "meter",
        plural: "meters",
        aliases: &["metre", "metres"],
        rule: linear(1.0),
    },
    UnitSpec {
        unit: Unit::Kilometers,
        category: Category::Distance,
        symbol: "km",
        singular: "kilometer",
        plural: "kilometers",
        aliases: &["kilometre", "kilometres"],
        rule: linear(1000.0),
    },
    UnitSpec {
        unit: Unit::Feet,
        category: Category::Distance,
        symbol: "ft",
        singular: "foot",
        plural: "feet",
        aliases: &[],
        rule: linear(0.3048),
    },
    UnitSpec {
        unit: Unit::Yards,
        category: Category::Distance,
        symbol: "yd",
        singular: "yard",
        plural: "yards",
        aliases: &[],
        rule: linear(0.9144),
    },
    UnitSpec {
        unit: Unit::Miles,
        category: Category::Distance,
        symbol: "mi",
        singular: "mile",
        plural: "miles",
        aliases: &[],
        rule: linear(1609.344),
    },
    UnitSpec {
        unit: Unit::Grams,
        category: Category::Mass,
        symbol: "g",
        singular: "gram",
        plural: "grams",
        aliases: &["gramme", "grammes"],
        rule: linear(1.0),
    },
    UnitSpec {
        unit: Unit::Kilograms,
        category: Category::Mass,
        symbol: "kg",
        singular: "kilogram",
        plural: "kilograms",
        aliases: &["kilo", "kilos"],
        rule: linear(1000.0),
    },
    UnitSpec {
        unit: Unit::Ounces,
        category: Category::Mass,
        symbol: "oz",
        singular: "ounce",
        plural: "ounces",
        aliases: &[],
        rule: linear(28.349523125),
    },
    UnitSpec {
        unit: Unit::Pounds,
        category: Category::Mass,
        symbol: "lb",
        singular: "pound",
        plural: "pounds",
        aliases: &["lbs"],
        rule: linear(453.59237),
    },
    UnitSpec {
        unit: Unit::Celsius,
        category: Category::Temperature,
        symbol: "°C",
        singular: "degree Celsius",
        plural: "degrees Celsius",
        aliases: &["c", "celsius", "degc", "centigrade"],
        rule: ConversionRule::Affine {
            scale: 1.0,
            offset: 273.15,
        },
    },
    UnitSpec {
        unit: Unit::Fahrenheit,
        category: Category::Temperature,
        symbol: "°F",
        singular: "degree Fahrenheit",
        plural: "degrees Fahrenheit",
        aliases: &["f", "fahrenheit", "degf"],
        rule: ConversionRule::Affine {
            scale: FAHRENHEIT_SCALE,
            offset: 459.67 * FAHRENHEIT_SCALE,
        },
    },
    UnitSpec {
        unit: Unit::Kelvin,
        category: Category::Temperature,
        symbol: "K",
        singular: "kelvin",
        plural: "kelvins",
        aliases: &[],
        rule: ConversionRule::Affine {
            scale: 1.0,
            offset: 0.0,
        },
    },
    UnitSpec {
        unit: Unit::Hours,
        category: Category::Time,
        symbol: "h",
        singular: "hour",
        plural: "hours",
        aliases: &["hr", "hrs"],
        rule: linear(3600.0),
    },
    UnitSpec {
        unit: Unit::Minutes,
        category: Category::Time,
        symbol: "min",
        singular: "minute",
        plural: "minutes",
        aliases: &["mins"],
        rule: linear(60.0),
    },
    UnitSpec {
        unit: Unit::Seconds,
        category: Category::Time,
        symbol: "s",
        singular: "second",
        plural: "seconds",
        aliases: &["sec", "secs"],
        rule: linear(1.0),
    },
];

static DISTANCE_UNITS: [Unit; 5] = [
    Unit::Meters,
    Unit::Kilometers,
    Unit::Feet,
    Unit::Yards,
    Unit::Miles,
];
static MASS_UNITS: [Unit; 4] = [Unit::Grams, Unit::Kilograms, Unit::Ounces, Unit::Pounds];
static TEMPERATURE_UNITS: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];
static TIME_UNITS: [Unit; 3] = [Unit::Hours, Unit::Minutes, Unit::Seconds];

lazy_static! {
    /// Lowercased symbol / name / alias -> unit
    static ref UNIT_INDEX: HashMap<String, Unit> = {
        let mut index = HashMap::new();
        for spec in UNIT_TABLE.iter() {
            let names = [spec.symbol, spec.singular, spec.plural]
                .into_iter()
                .chain(spec.aliases.iter().copied());
            for name in names {
                index.insert(name.to_lowercase(), spec.unit);
            }
        }
        index
    };
}

pub(crate) fn spec_of(unit: Unit) -> &'static UnitSpec {
    &UNIT_TABLE[unit as usize]
}

/// Units of a category in catalog order
pub fn units_for(category: Category) -> &'static [Unit] {
    match category {
        Category::Distance => &DISTANCE_UNITS,
        Category::Mass => &MASS_UNITS,
        Category::Temperature => &TEMPERATURE_UNITS,
        Category::Time => &TIME_UNITS,
    }
}

/// The reference unit every conversion in the category goes through
pub fn base_unit(category: Category) -> Unit {
    match category {
        Category::Distance => Unit::Meters,
        Category::Mass => Unit::Grams,
        Category::Temperature => Unit::Kelvin,
        Category::Time => Unit::Seconds,
    }
}

/// The from/to selection a category starts with: its first two catalog entries
pub fn default_pair(category: Category) -> (Unit, Unit) {
    let units = units_for(category);
    (units[0], units[1])
}

/// Find a unit by symbol, display name or alias, ignoring case
pub fn lookup_unit(name: &str) -> Result<Unit, ConvertError> {
    let key = name.trim().to_lowercase();
    UNIT_INDEX
        .get(&key)
        .copied()
        .or_else(|| {
            // "deg F", "degrees f"
            let stripped = key
                .trim_start_matches("degrees")
                .trim_start_matches("degree")
                .trim_start_matches("deg")
                .trim_start_matches('°')
                .trim();
            if stripped.len() < key.len() {
                UNIT_INDEX
                    .get(stripped)
                    .copied()
                    .filter(|u| u.category() == Category::Temperature)
            } else {
                None
            }
        })
        .ok_or_else(|| ConvertError::UnknownUnit(name.to_string()))
}
