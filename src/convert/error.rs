use crate::units::{Category, Unit};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid input: '{0}' is not a finite number")]
    InvalidInput(String),
    #[error("Unit '{unit}' does not belong to category {category}")]
    CategoryMismatch { unit: Unit, category: Category },
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Result of converting {amount} {from} to {to} is out of range")]
    OutOfRange { amount: f64, from: Unit, to: Unit },
}
