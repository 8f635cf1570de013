use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::money::round_currency;
use crate::core::CalculationError;
use crate::modules::regularizations::models::{BalanceType, ProratedCharge, ProvisionsCollected};

/// Totals of a reconciliation between prorated real costs and provisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub total_real_charges: Decimal,
    pub recoverable_charges: Decimal,
    pub non_recoverable_charges: Decimal,
    pub total_provisions_collected: Decimal,
    pub tenant_balance: Decimal,
    pub balance_type: BalanceType,
}

/// Reconcile collected provisions against the prorated real charges.
///
/// Only recoverable charges enter the balance; non-recoverable ones are
/// reported for audit. `tenant_balance = round2(collected - recoverable)`,
/// positive meaning a refund to the tenant.
pub fn reconcile(
    per_charge: &[ProratedCharge],
    provisions: &ProvisionsCollected,
    balance_epsilon: Decimal,
) -> Result<Reconciliation, CalculationError> {
    if per_charge.is_empty() {
        return Err(CalculationError::NoChargeItems);
    }

    provisions.validate().inspect_err(|err| {
        warn!(
            total_collected = %provisions.total_collected,
            error = %err,
            "Rejected provisions"
        );
    })?;

    let (recoverable_charges, non_recoverable_charges) = per_charge.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(recoverable, non_recoverable), charge| {
            let summed = if charge.is_recoverable {
                recoverable
                    .checked_add(charge.prorated_amount)
                    .map(|total| (total, non_recoverable))
            } else {
                non_recoverable
                    .checked_add(charge.prorated_amount)
                    .map(|total| (recoverable, total))
            };
            summed.ok_or_else(|| overflowed(charge))
        },
    )?;
    let total_real_charges = recoverable_charges
        .checked_add(non_recoverable_charges)
        .ok_or_else(|| {
            CalculationError::invalid_charge_amount("total", non_recoverable_charges)
        })?;

    let tenant_balance = provisions
        .total_collected
        .checked_sub(recoverable_charges)
        .map(round_currency)
        .ok_or_else(|| CalculationError::invalid_provisions_amount(provisions.total_collected))?;
    let balance_type = BalanceType::from_balance(tenant_balance, balance_epsilon);

    debug!(
        %recoverable_charges,
        %non_recoverable_charges,
        total_collected = %provisions.total_collected,
        %tenant_balance,
        balance_type = %balance_type,
        "Reconciled provisions"
    );

    Ok(Reconciliation {
        total_real_charges,
        recoverable_charges,
        non_recoverable_charges,
        total_provisions_collected: provisions.total_collected,
        tenant_balance,
        balance_type,
    })
}

fn overflowed(charge: &ProratedCharge) -> CalculationError {
    warn!(
        category = %charge.category,
        prorated_amount = %charge.prorated_amount,
        "Charge total exceeds the decimal range"
    );
    CalculationError::invalid_charge_amount(charge.category.to_string(), charge.prorated_amount)
}
