use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::decimal_from_f64;
use crate::core::CalculationError;

/// Expense category of a building charge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChargeCategory {
    Water,
    Heating,
    Elevator,
    GarbageTax,
    Cleaning,
    Gardening,
    Insurance,
    /// Free-form category supplied by the owner
    Other(String),
}

impl ChargeCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Water => "water",
            Self::Heating => "heating",
            Self::Elevator => "elevator",
            Self::GarbageTax => "garbage_tax",
            Self::Cleaning => "cleaning",
            Self::Gardening => "gardening",
            Self::Insurance => "insurance",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Whether the category may be billed to the tenant at all.
    ///
    /// Building insurance stays with the owner whatever the lease says.
    pub fn is_recoverable_by_policy(&self) -> bool {
        !matches!(self, Self::Insurance)
    }
}

impl std::fmt::Display for ChargeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ChargeCategory {
    fn from(value: String) -> Self {
        let value = value.trim();
        match value.to_lowercase().replace(['-', ' '], "_").as_str() {
            "water" => Self::Water,
            "heating" => Self::Heating,
            "elevator" => Self::Elevator,
            "garbage_tax" => Self::GarbageTax,
            "cleaning" => Self::Cleaning,
            "gardening" => Self::Gardening,
            "insurance" => Self::Insurance,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<&str> for ChargeCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ChargeCategory> for String {
    fn from(value: ChargeCategory) -> Self {
        value.as_str().to_string()
    }
}

/// One expense category with its real annual cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeItem {
    pub category: ChargeCategory,
    pub annual_amount: Decimal,
    pub is_recoverable: bool,
}

impl ChargeItem {
    /// Create a charge item; insurance is forced to non-recoverable
    pub fn new(category: impl Into<ChargeCategory>, annual_amount: Decimal, is_recoverable: bool) -> Self {
        let category = category.into();
        let is_recoverable = is_recoverable && category.is_recoverable_by_policy();
        Self {
            category,
            annual_amount,
            is_recoverable,
        }
    }

    pub fn recoverable(category: impl Into<ChargeCategory>, annual_amount: Decimal) -> Self {
        Self::new(category, annual_amount, true)
    }

    pub fn non_recoverable(category: impl Into<ChargeCategory>, annual_amount: Decimal) -> Self {
        Self::new(category, annual_amount, false)
    }

    /// Create a charge item from a floating point amount
    pub fn from_f64(
        category: impl Into<ChargeCategory>,
        annual_amount: f64,
        is_recoverable: bool,
    ) -> Result<Self, CalculationError> {
        let category = category.into();
        let amount = decimal_from_f64(annual_amount).ok_or_else(|| {
            CalculationError::invalid_charge_amount(category.as_str(), annual_amount)
        })?;
        let item = Self::new(category, amount, is_recoverable);
        item.validate()?;
        Ok(item)
    }

    /// Recoverability after the category policy is applied.
    ///
    /// Items deserialized from storage skip `new`, so the policy is enforced
    /// again here.
    pub fn effective_recoverable(&self) -> bool {
        self.is_recoverable && self.category.is_recoverable_by_policy()
    }

    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.annual_amount < Decimal::ZERO {
            return Err(CalculationError::invalid_charge_amount(
                self.category.as_str(),
                self.annual_amount,
            ));
        }
        Ok(())
    }
}

/// A charge apportioned over the occupancy window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProratedCharge {
    pub category: ChargeCategory,
    pub annual_amount: Decimal,
    pub prorated_amount: Decimal,
    pub is_recoverable: bool,
}
