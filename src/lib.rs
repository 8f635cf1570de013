//! Charge Regularization Library
//!
//! Year-end reconciliation of a tenant's recoverable charges against the
//! provisions collected during the year, plus annual rent indexation.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, CalculationError, Result};
pub use modules::regularizations;
pub use modules::rent_revisions;
