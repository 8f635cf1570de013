pub mod calendar;
pub mod error;
pub mod money;
pub mod traits;

pub use error::{AppError, CalculationError, Result};
