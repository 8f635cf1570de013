use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::CalculationError;
use crate::modules::regularizations::models::CalculationMethod;

/// Contractual occupancy window considered for one calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeasePeriod {
    /// Lease inception
    pub lease_start: NaiveDate,
    /// Lease termination, None while the lease is still running
    pub lease_end: Option<NaiveDate>,
    /// Calendar year being regularized
    pub target_year: i32,
}

impl LeasePeriod {
    pub fn new(lease_start: NaiveDate, lease_end: Option<NaiveDate>, target_year: i32) -> Self {
        Self {
            lease_start,
            lease_end,
            target_year,
        }
    }

    /// Open-ended lease
    pub fn open_ended(lease_start: NaiveDate, target_year: i32) -> Self {
        Self::new(lease_start, None, target_year)
    }

    /// Rejects a lease ending before it starts
    pub fn validate(&self) -> Result<(), CalculationError> {
        if let Some(end) = self.lease_end {
            if self.lease_start > end {
                return Err(CalculationError::invalid_period(format!(
                    "lease start {} is after lease end {}",
                    self.lease_start, end
                )));
            }
        }
        Ok(())
    }
}

/// Lease row as loaded by the caller's persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseRecord {
    pub id: String,
    pub lease_start: NaiveDate,
    pub lease_end: Option<NaiveDate>,
    /// Method pinned on the lease, overriding the configured default
    #[serde(default)]
    pub calculation_method: Option<CalculationMethod>,
}

impl LeaseRecord {
    /// Occupancy window of this lease for `target_year`
    pub fn period_for_year(&self, target_year: i32) -> LeasePeriod {
        LeasePeriod::new(self.lease_start, self.lease_end, target_year)
    }
}
