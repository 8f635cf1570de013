// Business logic layer for charge regularizations
//
// Implements:
// - Full regularization of a stored lease (lease lookup, receipt aggregation)
// - Regularization from caller-supplied provisions
// - One record per (lease, year): recalculation updates the record in place
// - Retrieval of a stored regularization

use std::sync::Arc;

use tracing::{info, warn};

use crate::core::traits::KeyedRepository;
use crate::core::{AppError, Result};
use crate::modules::regularizations::{
    models::{
        ChargeItem, ProvisionsCollected, RegularizationInput, RegularizationKey,
        RegularizationRecord,
    },
    repositories::{LeaseRepository, RegularizationRepository},
    services::RegularizationCalculator,
};

/// Service for regularization business logic
pub struct RegularizationService {
    calculator: RegularizationCalculator,
    leases: Arc<dyn LeaseRepository>,
    regularizations: Arc<dyn RegularizationRepository>,
}

impl RegularizationService {
    /// Create a new regularization service
    pub fn new(
        calculator: RegularizationCalculator,
        leases: Arc<dyn LeaseRepository>,
        regularizations: Arc<dyn RegularizationRepository>,
    ) -> Self {
        Self {
            calculator,
            leases,
            regularizations,
        }
    }

    /// Regularize the charges of a stored lease for one calendar year
    ///
    /// # Arguments
    /// * `lease_id` - Lease to regularize
    /// * `target_year` - Calendar year being closed
    /// * `charges` - Real annual charges of the building for that year
    ///
    /// # Returns
    /// * `Result<RegularizationRecord>` - The saved record, reused if one
    ///   already existed for the lease and year
    ///
    /// # Business Rules
    /// - Provisions are the charge parts of receipts starting in the window
    /// - The lease's pinned method wins over the configured default
    pub async fn regularize(
        &self,
        lease_id: &str,
        target_year: i32,
        charges: Vec<ChargeItem>,
    ) -> Result<RegularizationRecord> {
        let lease = self
            .leases
            .find_lease(lease_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Lease {}", lease_id)))?;

        let period = lease.period_for_year(target_year);
        let method = lease
            .calculation_method
            .unwrap_or(self.calculator.options().method);
        let window = self.calculator.resolve_window(&period, method)?;

        let receipts = self
            .leases
            .find_receipts(lease_id, window.effective_start, window.effective_end)
            .await?;
        let provisions = ProvisionsCollected::from_receipts(&receipts, &window)?;

        info!(
            lease_id,
            target_year,
            receipt_count = receipts.len(),
            total_collected = %provisions.total_collected,
            "Aggregated charge provisions"
        );

        let input = RegularizationInput::new(period, charges, provisions).with_method(method);
        self.record_regularization(lease_id, &input).await
    }

    /// Calculate and save a regularization from caller-supplied input
    ///
    /// Recalculating an existing `(lease_id, target_year)` replaces the
    /// previous figures on the same record.
    pub async fn record_regularization(
        &self,
        lease_id: &str,
        input: &RegularizationInput,
    ) -> Result<RegularizationRecord> {
        let target_year = input.lease.target_year;

        let result = self.calculator.calculate(input).inspect_err(|err| {
            warn!(lease_id, target_year, error = %err, "Regularization rejected");
        })?;

        let mut record = self
            .regularizations
            .find_or_create(lease_id, target_year)
            .await?;
        let replaced = record.is_calculated();
        record.apply(result);

        self.regularizations.save(&record).await?;

        info!(
            lease_id,
            target_year,
            regularization_id = record.id.as_str(),
            replaced,
            "Regularization saved"
        );

        Ok(record)
    }

    /// Get the regularization stored for a lease and year
    pub async fn get_regularization(
        &self,
        lease_id: &str,
        target_year: i32,
    ) -> Result<RegularizationRecord> {
        let key = RegularizationKey::new(lease_id, target_year);
        self.regularizations
            .find_by_key(&key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Regularization {}", key)))
    }
}
