use crate::convert::error::ConvertError;
use crate::format::NumberLocale;
use crate::units::{Category, Unit};
use log::debug;
use serde::Serialize;

/// Significant digits kept in a converted value; drops representation noise
/// such as 32.00000000000001 from affine chains.
const SIGNIFICANT_DIGITS: usize = 15;

/// Convert `amount` between two units of `category`
///
/// Goes through the category's base unit: `to.from_base(from.to_base(amount))`.
/// Converting a unit to itself returns `amount` untouched.
pub fn convert(amount: f64, category: Category, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    if !amount.is_finite() {
        return Err(ConvertError::InvalidInput(amount.to_string()));
    }
    ensure_member(from, category)?;
    ensure_member(to, category)?;

    if from == to {
        return Ok(amount);
    }

    let base_value = from.to_base(amount);
    // Rounding can push a value next to f64::MAX over the edge, so check after it
    let result = round_significant(to.from_base(base_value));
    if !result.is_finite() {
        return Err(ConvertError::OutOfRange { amount, from, to });
    }

    debug!(
        "{} {} -> {} {} (base {})",
        amount,
        from.symbol(),
        result,
        to.symbol(),
        base_value
    );
    Ok(result)
}

/// Parse the text of an amount field
///
/// The locale's decimal separator is accepted. Its grouping separator is
/// accepted only between groups of three digits in the integer part, so
/// "1,234.5" parses in en-US while "1,2,3" does not. Empty, non-numeric and
/// non-finite text is `InvalidInput`.
pub fn parse_amount(text: &str, locale: &NumberLocale) -> Result<f64, ConvertError> {
    let invalid = || ConvertError::InvalidInput(text.to_string());
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let (integer, fraction) = match trimmed.split_once(locale.decimal_separator) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    let mut normalized = String::with_capacity(trimmed.len());
    match locale.grouping_separator {
        Some(sep) if integer.contains(sep) => {
            if !is_grouped(integer, sep) {
                return Err(invalid());
            }
            normalized.extend(integer.chars().filter(|c| *c != sep));
        }
        _ => normalized.push_str(integer),
    }
    if let Some(fraction) = fraction {
        if locale.grouping_separator.is_some_and(|sep| fraction.contains(sep)) {
            return Err(invalid());
        }
        normalized.push('.');
        normalized.push_str(fraction);
    }

    // Rust accepts "inf" and "NaN"; neither is a usable amount
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// "1,234,567": a leading group of 1-3 digits, then groups of exactly three
fn is_grouped(integer: &str, sep: char) -> bool {
    let digits = integer
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(integer);
    let mut groups = digits.split(sep);
    let all_digits = |g: &str| g.chars().all(|c| c.is_ascii_digit());
    match groups.next() {
        Some(first) if (1..=3).contains(&first.len()) && all_digits(first) => {}
        _ => return false,
    }
    groups.all(|g| g.len() == 3 && all_digits(g))
}

fn ensure_member(unit: Unit, category: Category) -> Result<(), ConvertError> {
    if unit.belongs_to(category) {
        Ok(())
    } else {
        Err(ConvertError::CategoryMismatch { unit, category })
    }
}

fn round_significant(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// A single conversion asked for by the UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(amount: f64, category: Category, from: Unit, to: Unit) -> Result<Self, ConvertError> {
        ensure_member(from, category)?;
        ensure_member(to, category)?;
        Ok(Self {
            amount,
            category,
            from,
            to,
        })
    }

    /// Build a request whose category is taken from the input unit
    pub fn between(amount: f64, from: Unit, to: Unit) -> Result<Self, ConvertError> {
        Self::new(amount, from.category(), from, to)
    }

    pub fn execute(&self) -> Result<f64, ConvertError> {
        convert(self.amount, self.category, self.from, self.to)
    }
}

/// Result of a request, ready to serialize
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutcome {
    #[serde(flatten)]
    pub request: ConversionRequest,
    pub value: f64,
    pub formatted: String,
}
