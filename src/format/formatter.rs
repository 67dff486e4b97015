use crate::format::locale::NumberLocale;
use crate::units::Unit;
use log::warn;
use serde::{Deserialize, Serialize};

/// Digits beyond this only print binary noise of an f64
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Which unit label to print after the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    /// "62.1371 miles"
    #[default]
    Long,
    /// "62.1371 mi"
    Short,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub locale: NumberLocale,
    pub max_fraction_digits: usize,
    /// Title-case long unit names ("62.1371 Miles")
    pub capitalize: bool,
    pub style: UnitStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            max_fraction_digits: 4,
            capitalize: true,
            style: UnitStyle::Long,
        }
    }
}

/// Renders converted values for display
#[derive(Debug, Clone, Default)]
pub struct UnitFormatter {
    options: FormatOptions,
}

impl UnitFormatter {
    pub fn new(mut options: FormatOptions) -> Self {
        if options.max_fraction_digits > MAX_FRACTION_DIGITS {
            warn!(
                "max_fraction_digits {} clamped to {}",
                options.max_fraction_digits, MAX_FRACTION_DIGITS
            );
            options.max_fraction_digits = MAX_FRACTION_DIGITS;
        }
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.options.locale
    }

    /// Format a value with its unit label, e.g. "1,609.344 Meters"
    pub fn format(&self, value: f64, unit: Unit) -> String {
        let number = self.format_number(value);
        let singular = number == "1" || number == "-1";
        format!("{} {}", number, self.label(unit, singular))
    }

    /// Unit label in the configured style, as used in pickers and results
    pub fn label(&self, unit: Unit, singular: bool) -> String {
        match self.options.style {
            UnitStyle::Short => unit.symbol().to_string(),
            UnitStyle::Long => {
                let name = if singular {
                    unit.singular()
                } else {
                    unit.plural()
                };
                if self.options.capitalize {
                    title_case(name)
                } else {
                    name.to_string()
                }
            }
        }
    }

    /// Format just the number: rounded, trailing zeros dropped, grouped by thousands
    pub fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.*}", self.options.max_fraction_digits, value);
        let (sign, digits) = match rounded.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rounded.as_str()),
        };
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (digits, ""),
        };

        // "-0" after rounding
        let sign = if integer.chars().all(|c| c == '0') && fraction.is_empty() {
            ""
        } else {
            sign
        };

        let locale = &self.options.locale;
        let mut out = String::with_capacity(rounded.len() + integer.len() / 3);
        out.push_str(sign);
        out.push_str(&group_thousands(integer, locale.grouping_separator));
        if !fraction.is_empty() {
            out.push(locale.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Format a value with the default formatter
pub fn format(value: f64, unit: Unit) -> String {
    UnitFormatter::default().format(value, unit)
}

fn group_thousands(integer: &str, separator: Option<char>) -> String {
    let separator = match separator {
        Some(sep) => sep,
        None => return integer.to_string(),
    };

    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> UnitFormatter {
        UnitFormatter::new(FormatOptions {
            capitalize: false,
            ..FormatOptions::default()
        })
    }

    #[test]
    fn test_format_miles() {
        let text = format(62.1371, Unit::Miles);
        assert!(text.contains("62.1371"));
        assert!(text.to_lowercase().contains("miles"));
        assert_eq!(text, "62.1371 Miles");
    }

    #[test]
    fn test_rounding_and_trailing_zeros() {
        let f = plain();
        assert_eq!(f.format(62.137119223733, Unit::Miles), "62.1371 miles");
        assert_eq!(f.format(109.36132983377078, Unit::Yards), "109.3613 yards");
        assert_eq!(f.format(2.5, Unit::Hours), "2.5 hours");
        assert_eq!(f.format(32.0, Unit::Fahrenheit), "32 degrees Fahrenheit");
    }

    #[test]
    fn test_singular_names() {
        let f = plain();
        assert_eq!(f.format(1.0, Unit::Feet), "1 foot");
        assert_eq!(f.format(-1.0, Unit::Celsius), "-1 degree Celsius");
        assert_eq!(f.format(1.00001, Unit::Kelvin), "1 kelvin");
        assert_eq!(f.format(1.5, Unit::Feet), "1.5 feet");
    }

    #[test]
    fn test_capitalized_long_names() {
        assert_eq!(
            format(212.0, Unit::Fahrenheit),
            "212 Degrees Fahrenheit"
        );
        assert_eq!(format(1.0, Unit::Kilograms), "1 Kilogram");
    }

    #[test]
    fn test_short_style() {
        let f = UnitFormatter::new(FormatOptions {
            style: UnitStyle::Short,
            ..FormatOptions::default()
        });
        assert_eq!(f.format(-40.0, Unit::Celsius), "-40 °C");
        assert_eq!(f.format(5280.0, Unit::Feet), "5,280 ft");
    }

    #[test]
    fn test_fraction_digits_are_clamped() {
        let f = UnitFormatter::new(FormatOptions {
            max_fraction_digits: 70_000,
            capitalize: false,
            ..FormatOptions::default()
        });
        assert_eq!(f.options().max_fraction_digits, MAX_FRACTION_DIGITS);
        assert_eq!(f.format(1.5, Unit::Meters), "1.5 meters");
    }

    #[test]
    fn test_grouping_and_locales() {
        let f = plain();
        assert_eq!(f.format_number(1234567.891), "1,234,567.891");
        assert_eq!(f.format_number(-1000.0), "-1,000");
        assert_eq!(f.format_number(999.0), "999");
        assert_eq!(f.format_number(-0.00001), "0");

        let de = UnitFormatter::new(FormatOptions {
            locale: NumberLocale::de_de(),
            ..FormatOptions::default()
        });
        assert_eq!(de.format_number(1234.5), "1.234,5");

        let posix = UnitFormatter::new(FormatOptions {
            locale: NumberLocale::posix(),
            max_fraction_digits: 2,
            ..FormatOptions::default()
        });
        assert_eq!(posix.format_number(1234.567), "1234.57");
    }
}
