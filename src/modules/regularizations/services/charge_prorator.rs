use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::money::round_currency;
use crate::core::CalculationError;
use crate::modules::regularizations::models::{ChargeItem, OccupancyWindow, ProratedCharge};

/// Apportion each annual charge over the occupied share of the year.
///
/// `prorated_amount = round2(annual_amount * occupancy_fraction)`, half-up.
/// Output keeps input order. Every item is validated before any is
/// prorated, so a failure never yields a partial list.
pub fn prorate_charges(
    charge_items: &[ChargeItem],
    occupancy_fraction: Decimal,
) -> Result<Vec<ProratedCharge>, CalculationError> {
    prorate_by_share(charge_items, occupancy_fraction, Decimal::ONE)
}

/// Apportion each annual charge over a resolved occupancy window.
///
/// Month-mode windows prorate by `round2(annual_amount * months / 12)`, so
/// one month of a 1200 charge is exactly 100.00.
pub fn prorate_window_charges(
    charge_items: &[ChargeItem],
    window: &OccupancyWindow,
) -> Result<Vec<ProratedCharge>, CalculationError> {
    let (numerator, denominator) = window.proration_share();
    prorate_by_share(charge_items, numerator, denominator)
}

fn prorate_by_share(
    charge_items: &[ChargeItem],
    numerator: Decimal,
    denominator: Decimal,
) -> Result<Vec<ProratedCharge>, CalculationError> {
    if charge_items.is_empty() {
        warn!("Regularization requested without any charge item");
        return Err(CalculationError::NoChargeItems);
    }

    if numerator <= Decimal::ZERO || denominator <= Decimal::ZERO || numerator > denominator {
        return Err(CalculationError::invalid_period(format!(
            "occupancy share {}/{} is outside (0, 1]",
            numerator, denominator
        )));
    }

    for item in charge_items {
        item.validate().inspect_err(|_| {
            warn!(
                category = %item.category,
                annual_amount = %item.annual_amount,
                "Rejected negative charge amount"
            );
        })?;
    }

    let prorated = charge_items
        .iter()
        .map(|item| {
            let amount = item
                .annual_amount
                .checked_mul(numerator)
                .and_then(|scaled| scaled.checked_div(denominator))
                .ok_or_else(|| {
                    CalculationError::invalid_charge_amount(
                        item.category.to_string(),
                        item.annual_amount,
                    )
                })?;

            Ok(ProratedCharge {
                category: item.category.clone(),
                annual_amount: item.annual_amount,
                prorated_amount: round_currency(amount),
                is_recoverable: item.effective_recoverable(),
            })
        })
        .collect::<Result<Vec<_>, CalculationError>>()?;

    debug!(
        charge_count = prorated.len(),
        %numerator,
        %denominator,
        "Prorated charges"
    );

    Ok(prorated)
}
