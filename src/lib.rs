pub mod config;
pub mod convert;
pub mod format;
pub mod session;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, ConvertError};
pub use format::format;
pub use units::{base_unit, units_for, Category, Unit};
