use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::calendar;
use crate::core::money::{round_ratio, MAX_RATIO_SCALE, MIN_RATIO_SCALE};
use crate::core::CalculationError;
use crate::modules::regularizations::models::{CalculationMethod, LeasePeriod, OccupancyWindow};

/// Clip a lease to its target calendar year and measure the occupied share.
///
/// Days are counted inclusively. The fraction is rounded half-up to
/// `ratio_scale` places (clamped to the supported range). In day mode that
/// rounded value is the one every charge is prorated with; in month mode
/// charges use the exact `months / 12` share kept in `occupied_months`.
///
/// # Errors
/// `InvalidPeriod` when the lease dates are inverted, when the target year
/// cannot be represented, or when the lease does not overlap the year.
pub fn resolve_occupancy_window(
    lease: &LeasePeriod,
    method: CalculationMethod,
    ratio_scale: u32,
) -> Result<OccupancyWindow, CalculationError> {
    lease.validate()?;

    let year = lease.target_year;
    let (year_start, year_end) = match (calendar::year_start(year), calendar::year_end(year)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(CalculationError::invalid_period(format!(
                "target year {} is outside the supported calendar",
                year
            )))
        }
    };

    let effective_start = lease.lease_start.max(year_start);
    let effective_end = lease.lease_end.map_or(year_end, |end| end.min(year_end));

    if effective_start > effective_end {
        warn!(
            target_year = year,
            lease_start = %lease.lease_start,
            lease_end = ?lease.lease_end,
            "Lease does not overlap the target year"
        );
        return Err(CalculationError::invalid_period(format!(
            "lease {} to {} has no day in {}",
            lease.lease_start,
            lease
                .lease_end
                .map_or_else(|| "open end".to_string(), |end| end.to_string()),
            year
        )));
    }

    // Both bounds lie inside one calendar year, so the count is 1..=366
    let occupancy_days = u32::try_from(calendar::days_inclusive(effective_start, effective_end))
        .map_err(|_| CalculationError::invalid_period("occupancy exceeds one year"))?;
    let total_days_in_year = calendar::days_in_year(year);

    let (raw_fraction, occupied_months) = match method {
        CalculationMethod::ProrataExactDays => (
            Decimal::from(occupancy_days) / Decimal::from(total_days_in_year),
            None,
        ),
        CalculationMethod::ProrataMonths => {
            // Same calendar year on both ends, so 1..=12
            let months = u32::try_from(calendar::months_inclusive(effective_start, effective_end))
                .map_err(|_| CalculationError::invalid_period("occupancy exceeds one year"))?;
            (Decimal::from(months) / Decimal::from(12u32), Some(months))
        }
    };
    let occupancy_fraction =
        round_ratio(raw_fraction, ratio_scale.clamp(MIN_RATIO_SCALE, MAX_RATIO_SCALE));

    debug!(
        target_year = year,
        method = %method,
        %effective_start,
        %effective_end,
        occupancy_days,
        total_days_in_year,
        %occupancy_fraction,
        "Resolved occupancy window"
    );

    Ok(OccupancyWindow {
        effective_start,
        effective_end,
        occupancy_days,
        total_days_in_year,
        occupancy_fraction,
        occupied_months,
    })
}
