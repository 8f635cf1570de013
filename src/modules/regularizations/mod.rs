pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    BalanceType, CalculationMethod, CalculationOptions, ChargeCategory, ChargeItem, LeasePeriod,
    ProvisionsCollected, RegularizationInput, RegularizationRecord, RegularizationResult,
};
pub use repositories::{LeaseRepository, RegularizationRepository};
pub use services::{RegularizationCalculator, RegularizationService};
