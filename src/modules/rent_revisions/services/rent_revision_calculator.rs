use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::calendar;
use crate::core::money::{
    round_currency, round_ratio, DEFAULT_RATIO_SCALE, MAX_RATIO_SCALE, MIN_RATIO_SCALE,
};
use crate::core::CalculationError;
use crate::modules::rent_revisions::models::{RentRevision, RentRevisionRequest};

/// Calculator for annual rent indexation against a reference index
pub struct RentRevisionCalculator {
    ratio_scale: u32,
}

impl RentRevisionCalculator {
    pub fn new(ratio_scale: u32) -> Self {
        Self {
            ratio_scale: ratio_scale.clamp(MIN_RATIO_SCALE, MAX_RATIO_SCALE),
        }
    }

    /// Index the rent on the lease anniversary of `revision_year`
    ///
    /// `new_rent = round2(current_rent * new_index / reference_index)`. A
    /// falling index leaves the rent unchanged unless the request allows a
    /// decrease.
    ///
    /// # Errors
    /// - `InvalidIndexValue` if either index is zero or negative
    /// - `InvalidChargeAmount` (category `rent`) if the rent is negative
    /// - `InvalidPeriod` if the revision year is not after the lease start year
    pub fn revise(&self, request: &RentRevisionRequest) -> Result<RentRevision, CalculationError> {
        for index in [request.reference_index, request.new_index] {
            if index <= Decimal::ZERO {
                return Err(CalculationError::InvalidIndexValue { index });
            }
        }

        if request.current_rent < Decimal::ZERO {
            return Err(CalculationError::invalid_charge_amount(
                "rent",
                request.current_rent,
            ));
        }

        if request.revision_year <= request.lease_start.year() {
            return Err(CalculationError::invalid_period(format!(
                "revision year {} must follow lease start year {}",
                request.revision_year,
                request.lease_start.year()
            )));
        }

        let effective_date = calendar::anniversary_in_year(request.lease_start, request.revision_year)
            .ok_or_else(|| {
                CalculationError::invalid_period(format!(
                    "revision year {} is outside the supported calendar",
                    request.revision_year
                ))
            })?;

        let indexed_rent = request
            .current_rent
            .checked_mul(request.new_index)
            .and_then(|scaled| scaled.checked_div(request.reference_index))
            .map(round_currency)
            .ok_or_else(|| CalculationError::invalid_charge_amount("rent", request.current_rent))?;

        let new_rent = if indexed_rent < request.current_rent && !request.allow_decrease {
            warn!(
                revision_year = request.revision_year,
                reference_index = %request.reference_index,
                new_index = %request.new_index,
                "Index fell; rent kept unchanged"
            );
            request.current_rent
        } else {
            indexed_rent
        };

        let increase = new_rent - request.current_rent;
        let increase_rate = if request.current_rent.is_zero() {
            Decimal::ZERO
        } else {
            increase
                .checked_div(request.current_rent)
                .map(|rate| round_ratio(rate, self.ratio_scale))
                .ok_or(CalculationError::InvalidIndexValue {
                    index: request.new_index,
                })?
        };

        info!(
            revision_year = request.revision_year,
            %effective_date,
            previous_rent = %request.current_rent,
            %new_rent,
            %increase_rate,
            "Rent revision calculated"
        );

        Ok(RentRevision {
            revision_year: request.revision_year,
            effective_date,
            previous_rent: request.current_rent,
            new_rent,
            increase,
            increase_rate,
            reference_index: request.reference_index,
            new_index: request.new_index,
            applied: new_rent != request.current_rent,
        })
    }
}

impl Default for RentRevisionCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_RATIO_SCALE)
    }
}
