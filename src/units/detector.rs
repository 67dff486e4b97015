use crate::convert::error::ConvertError;
use crate::units::catalog::lookup_unit;
use crate::units::unit::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional decimal, optional scientific notation) + optional whitespace + unit name
    /// Examples: "100 mi", "10.5km", "-40 °F", "1e3 g", "2 degrees Celsius"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<amount>[-+]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z°][a-zA-Z° ]*)$"
    ).unwrap();
}

/// Check if a string looks like an amount followed by a unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split a quantity string such as "100 mi" into its amount and unit
pub fn parse_quantity(s: &str) -> Result<(f64, Unit), ConvertError> {
    let trimmed = s.trim();
    let captures = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConvertError::InvalidInput(s.to_string()))?;

    let amount: f64 = captures["amount"]
        .parse()
        .map_err(|_| ConvertError::InvalidInput(s.to_string()))?;
    if !amount.is_finite() {
        return Err(ConvertError::InvalidInput(s.to_string()));
    }

    let unit = lookup_unit(&captures["unit"])?;
    Ok((amount, unit))
}
