use tracing::info;

use crate::core::CalculationError;
use crate::modules::regularizations::models::{
    CalculationMethod, CalculationOptions, LeasePeriod, OccupancyWindow, RegularizationInput,
    RegularizationResult,
};
use crate::modules::regularizations::services::{
    prorate_window_charges, reconcile, resolve_occupancy_window,
};

/// Calculator for year-end charge regularizations
///
/// Pure: takes plain data, returns plain data, holds no state beyond its
/// options. Identical inputs always produce identical results, so a
/// calculation can be re-run and re-saved safely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularizationCalculator {
    options: CalculationOptions,
}

impl RegularizationCalculator {
    pub fn new(options: CalculationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalculationOptions {
        &self.options
    }

    /// Method applied to `input`: the pinned one, else the configured default
    pub fn method_for(&self, input: &RegularizationInput) -> CalculationMethod {
        input.method.unwrap_or(self.options.method)
    }

    /// Resolve the occupancy window of a lease for its target year
    pub fn resolve_window(
        &self,
        lease: &LeasePeriod,
        method: CalculationMethod,
    ) -> Result<OccupancyWindow, CalculationError> {
        resolve_occupancy_window(lease, method, self.options.ratio_scale)
    }

    /// Run the full pipeline: occupancy window, proration, reconciliation
    ///
    /// # Errors
    /// Checked in this order:
    /// - `InvalidProvisionsAmount` if the collected total is negative
    /// - `InvalidPeriod` if the lease has no day in the target year
    /// - `NoChargeItems` if `input.charges` is empty
    /// - `InvalidChargeAmount` if a charge is negative or the totals overflow
    pub fn calculate(
        &self,
        input: &RegularizationInput,
    ) -> Result<RegularizationResult, CalculationError> {
        input.provisions.validate()?;
        let method = self.method_for(input);

        let window = self.resolve_window(&input.lease, method)?;
        let per_charge = prorate_window_charges(&input.charges, &window)?;
        let reconciliation = reconcile(&per_charge, &input.provisions, self.options.balance_epsilon)?;

        info!(
            target_year = input.lease.target_year,
            method = %method,
            occupancy_days = window.occupancy_days,
            recoverable_charges = %reconciliation.recoverable_charges,
            tenant_balance = %reconciliation.tenant_balance,
            balance_type = %reconciliation.balance_type,
            "Regularization calculated"
        );

        Ok(RegularizationResult {
            target_year: input.lease.target_year,
            calculation_method: method,
            effective_start: window.effective_start,
            effective_end: window.effective_end,
            occupancy_days: window.occupancy_days,
            total_days_in_year: window.total_days_in_year,
            occupancy_fraction: window.occupancy_fraction,
            per_charge,
            total_real_charges: reconciliation.total_real_charges,
            recoverable_charges: reconciliation.recoverable_charges,
            non_recoverable_charges: reconciliation.non_recoverable_charges,
            total_provisions_collected: reconciliation.total_provisions_collected,
            tenant_balance: reconciliation.tenant_balance,
            balance_type: reconciliation.balance_type,
        })
    }
}
