use crate::config::Config;
use crate::convert::{convert, parse_amount, ConvertError};
use crate::format::{NumberLocale, UnitFormatter};
use crate::units::{default_pair, Category, Unit};
use log::debug;
use serde::Serialize;

/// The converter screen's current selection
///
/// Owned by the UI layer and re-read on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    category: Category,
    from: Unit,
    to: Unit,
    amount_text: String,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let (from, to) = config.initial_units();
        Self {
            category: config.defaults.category,
            from,
            to,
            amount_text: config.defaults.amount.clone(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> Unit {
        self.from
    }

    pub fn to_unit(&self) -> Unit {
        self.to
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Switch category; from/to reset to the category's first two units
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        let (from, to) = default_pair(category);
        debug!("Category {} -> {}, units reset to {} -> {}", self.category, category, from, to);
        self.category = category;
        self.from = from;
        self.to = to;
    }

    pub fn set_from(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.ensure_member(unit)?;
        self.from = unit;
        Ok(())
    }

    pub fn set_to(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.ensure_member(unit)?;
        self.to = unit;
        Ok(())
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// The parsed amount, or `None` while the field does not hold a finite number
    pub fn amount(&self, locale: &NumberLocale) -> Option<f64> {
        parse_amount(&self.amount_text, locale).ok()
    }

    /// Converted value, or `None` when there is nothing to show
    pub fn value(&self, locale: &NumberLocale) -> Option<f64> {
        let amount = self.amount(locale)?;
        match convert(amount, self.category, self.from, self.to) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Suppressing result: {}", e);
                None
            }
        }
    }

    /// Text for the result display; `None` suppresses it
    pub fn result(&self, formatter: &UnitFormatter) -> Option<String> {
        self.value(formatter.locale())
            .map(|value| formatter.format(value, self.to))
    }

    fn ensure_member(&self, unit: Unit) -> Result<(), ConvertError> {
        if unit.belongs_to(self.category) {
            Ok(())
        } else {
            Err(ConvertError::CategoryMismatch {
                unit,
                category: self.category,
            })
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::empty())
    }
}
