pub mod converter;
pub mod error;

#[cfg(test)]
mod tests;

pub use converter::*;
pub use error::ConvertError;
