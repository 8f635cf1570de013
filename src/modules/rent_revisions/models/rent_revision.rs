use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual indexation request for a lease rent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRevisionRequest {
    /// Lease inception; its anniversary is the revision date
    pub lease_start: NaiveDate,
    /// Monthly rent before revision, excluding charges
    pub current_rent: Decimal,
    /// Index value referenced by the lease (or by the previous revision)
    pub reference_index: Decimal,
    /// Same-quarter index value published for the revision year
    pub new_index: Decimal,
    pub revision_year: i32,
    /// Let a falling index lower the rent
    #[serde(default)]
    pub allow_decrease: bool,
}

/// Outcome of a rent indexation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRevision {
    pub revision_year: i32,
    pub effective_date: NaiveDate,
    pub previous_rent: Decimal,
    pub new_rent: Decimal,
    /// Signed monthly difference
    pub increase: Decimal,
    /// `increase / previous_rent`, rounded to the ratio scale
    pub increase_rate: Decimal,
    pub reference_index: Decimal,
    pub new_index: Decimal,
    /// False when the rent is left unchanged
    pub applied: bool,
}
