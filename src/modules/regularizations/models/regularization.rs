use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::regularizations::models::{
    CalculationMethod, ChargeItem, LeasePeriod, ProratedCharge, ProvisionsCollected,
};

/// Lease dates clipped to the target calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyWindow {
    pub effective_start: NaiveDate,
    pub effective_end: NaiveDate,
    /// Days occupied, both boundary days included
    pub occupancy_days: u32,
    /// 365 or 366
    pub total_days_in_year: u32,
    /// Share of the year occupied, in (0, 1]
    pub occupancy_fraction: Decimal,
    /// Calendar months touched, set when prorating by months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_months: Option<u32>,
}

impl OccupancyWindow {
    /// Unrounded share of the year as `(numerator, denominator)`.
    ///
    /// Month mode prorates by exactly `months / 12`, which has no finite
    /// decimal form; day mode prorates by the rounded fraction itself.
    pub fn proration_share(&self) -> (Decimal, Decimal) {
        match self.occupied_months {
            Some(months) => (Decimal::from(months), Decimal::from(12u32)),
            None => (self.occupancy_fraction, Decimal::ONE),
        }
    }
}

/// Direction of the year-end balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceType {
    /// Tenant overpaid; the owner refunds the difference
    Refund,
    /// Tenant underpaid; the tenant owes the difference
    AdditionalPayment,
    /// Nothing to settle
    Balanced,
}

impl BalanceType {
    /// Classify a signed balance, treating `|balance| < epsilon` as settled
    pub fn from_balance(balance: Decimal, epsilon: Decimal) -> Self {
        if balance.abs() < epsilon || balance.is_zero() {
            Self::Balanced
        } else if balance > Decimal::ZERO {
            Self::Refund
        } else {
            Self::AdditionalPayment
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refund => "refund",
            Self::AdditionalPayment => "additional_payment",
            Self::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for BalanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the calculator needs for one lease and one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularizationInput {
    pub lease: LeasePeriod,
    pub charges: Vec<ChargeItem>,
    pub provisions: ProvisionsCollected,
    /// Method pinned for this lease; the configured default applies otherwise
    #[serde(default)]
    pub method: Option<CalculationMethod>,
}

impl RegularizationInput {
    pub fn new(lease: LeasePeriod, charges: Vec<ChargeItem>, provisions: ProvisionsCollected) -> Self {
        Self {
            lease,
            charges,
            provisions,
            method: None,
        }
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = Some(method);
        self
    }
}

/// Year-end charge regularization statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularizationResult {
    pub target_year: i32,
    pub calculation_method: CalculationMethod,
    pub effective_start: NaiveDate,
    pub effective_end: NaiveDate,
    pub occupancy_days: u32,
    pub total_days_in_year: u32,
    pub occupancy_fraction: Decimal,
    /// Charges in input order
    pub per_charge: Vec<ProratedCharge>,
    pub total_real_charges: Decimal,
    pub recoverable_charges: Decimal,
    pub non_recoverable_charges: Decimal,
    pub total_provisions_collected: Decimal,
    /// Positive when the tenant is owed money, negative when the tenant owes
    pub tenant_balance: Decimal,
    pub balance_type: BalanceType,
}

impl RegularizationResult {
    /// Amount changing hands, whatever the direction
    pub fn amount_due(&self) -> Decimal {
        match self.balance_type {
            BalanceType::Balanced => Decimal::ZERO,
            _ => self.tenant_balance.abs(),
        }
    }
}
