use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::decimal_from_f64;
use crate::core::CalculationError;
use crate::modules::regularizations::models::OccupancyWindow;

/// Rent receipt issued to the tenant for one billing period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: String,
    /// First day covered by the receipt
    pub period_start: NaiveDate,
    /// Last day covered by the receipt
    pub period_end: NaiveDate,
    pub rent_amount: Decimal,
    /// Advance on charges included in the receipt
    pub charges_amount: Decimal,
}

/// Charge provisions already collected from the tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionsCollected {
    pub total_collected: Decimal,
    /// Sub-period actually covered by the collected provisions
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

impl ProvisionsCollected {
    pub fn new(total_collected: Decimal, period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            total_collected,
            period_start,
            period_end,
        }
    }

    /// Create provisions from a floating point total
    pub fn from_f64(
        total_collected: f64,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<Self, CalculationError> {
        let total = decimal_from_f64(total_collected)
            .ok_or_else(|| CalculationError::invalid_provisions_amount(total_collected))?;
        let provisions = Self::new(total, period_start, period_end);
        provisions.validate()?;
        Ok(provisions)
    }

    /// Aggregate the charge provisions of every receipt starting inside the
    /// occupancy window.
    ///
    /// Receipts are attributed by their first covered day so that a receipt
    /// straddling two years is counted once. With no matching receipt the
    /// total is zero and the covered period is the window itself.
    pub fn from_receipts(
        receipts: &[ReceiptRecord],
        window: &OccupancyWindow,
    ) -> Result<Self, CalculationError> {
        let mut total = Decimal::ZERO;
        let mut covered: Option<(NaiveDate, NaiveDate)> = None;

        for receipt in receipts.iter().filter(|r| {
            r.period_start >= window.effective_start && r.period_start <= window.effective_end
        }) {
            if receipt.charges_amount < Decimal::ZERO {
                return Err(CalculationError::invalid_provisions_amount(
                    receipt.charges_amount,
                ));
            }
            total = total
                .checked_add(receipt.charges_amount)
                .ok_or_else(|| CalculationError::invalid_provisions_amount(receipt.charges_amount))?;
            covered = Some(match covered {
                Some((start, end)) => (
                    start.min(receipt.period_start),
                    end.max(receipt.period_end),
                ),
                None => (receipt.period_start, receipt.period_end),
            });
        }

        let (period_start, period_end) =
            covered.unwrap_or((window.effective_start, window.effective_end));

        Ok(Self::new(total, period_start, period_end))
    }

    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.total_collected < Decimal::ZERO {
            return Err(CalculationError::invalid_provisions_amount(
                self.total_collected,
            ));
        }
        if self.period_start > self.period_end {
            return Err(CalculationError::invalid_period(format!(
                "provisions period start {} is after its end {}",
                self.period_start, self.period_end
            )));
        }
        Ok(())
    }
}
