use crate::format::{FormatOptions, NumberLocale, UnitFormatter, UnitStyle};
use crate::units::{default_pair, lookup_unit, Category, Unit};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Number and unit-label rendering
    #[serde(default)]
    pub display: DisplayConfig,

    // Selection shown when the converter starts
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,
    #[serde(default = "default_capitalize")]
    pub capitalize: bool,
    #[serde(default)]
    pub style: UnitStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            max_fraction_digits: default_max_fraction_digits(),
            capitalize: default_capitalize(),
            style: UnitStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(default = "default_amount")]
    pub amount: String,
    // Unit names as accepted by `lookup_unit`
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            amount: default_amount(),
            from: None,
            to: None,
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_max_fraction_digits() -> usize {
    4
}

fn default_capitalize() -> bool {
    true
}

fn default_category() -> Category {
    Category::Distance
}

fn default_amount() -> String {
    "100".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            locale: NumberLocale::from_tag(&self.display.locale),
            max_fraction_digits: self.display.max_fraction_digits,
            capitalize: self.display.capitalize,
            style: self.display.style,
        }
    }

    pub fn formatter(&self) -> UnitFormatter {
        UnitFormatter::new(self.format_options())
    }

    /// Start-up (from, to) selection
    ///
    /// Without overrides this is meters -> yards for distance and the
    /// category's first two units otherwise. Overrides naming a unit outside
    /// the category are ignored.
    pub fn initial_units(&self) -> (Unit, Unit) {
        let category = self.defaults.category;
        let (default_from, default_to) = if category == Category::Distance {
            (Unit::Meters, Unit::Yards)
        } else {
            default_pair(category)
        };

        let from = resolve_default_unit(self.defaults.from.as_deref(), category, "from");
        let to = resolve_default_unit(self.defaults.to.as_deref(), category, "to");
        match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (Some(from), None) => (from, default_to),
            (None, Some(to)) => (default_from, to),
            (None, None) => (default_from, default_to),
        }
    }
}

fn resolve_default_unit(name: Option<&str>, category: Category, field: &str) -> Option<Unit> {
    let name = name?;
    match lookup_unit(name) {
        Ok(unit) if unit.belongs_to(category) => Some(unit),
        Ok(unit) => {
            warn!(
                "Ignoring defaults.{} = '{}': {} is not a {} unit",
                field, name, unit, category
            );
            None
        }
        Err(e) => {
            warn!("Ignoring defaults.{} = '{}': {}", field, name, e);
            None
        }
    }
}
