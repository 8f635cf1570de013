pub mod calculation;
pub mod charge_item;
pub mod lease_period;
pub mod provisions;
pub mod regularization;
pub mod regularization_record;

pub use calculation::{CalculationMethod, CalculationOptions};
pub use charge_item::{ChargeCategory, ChargeItem, ProratedCharge};
pub use lease_period::{LeasePeriod, LeaseRecord};
pub use provisions::{ProvisionsCollected, ReceiptRecord};
pub use regularization::{
    BalanceType, OccupancyWindow, RegularizationInput, RegularizationResult,
};
pub use regularization_record::{RegularizationKey, RegularizationRecord};
