use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::DEFAULT_RATIO_SCALE;

/// Strategy used to apportion annual amounts over the occupancy window.
///
/// The tag is recorded on every result so a statement always says which
/// legal computation mode produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Occupied days over days in the year
    #[default]
    ProrataExactDays,
    /// Occupied calendar months over twelve
    ProrataMonths,
}

impl CalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProrataExactDays => "prorata_exact_days",
            Self::ProrataMonths => "prorata_months",
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CalculationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prorata_exact_days" => Ok(Self::ProrataExactDays),
            "prorata_months" => Ok(Self::ProrataMonths),
            _ => Err(format!("Invalid calculation method: {}", s)),
        }
    }
}

/// Tunables of a regularization run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Method used when the input does not pin one
    pub method: CalculationMethod,
    /// Balances strictly smaller than this in absolute value count as balanced
    pub balance_epsilon: Decimal,
    /// Decimal places kept on the occupancy fraction
    pub ratio_scale: u32,
}

impl CalculationOptions {
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            method: CalculationMethod::default(),
            balance_epsilon: Decimal::new(1, 2), // 0.01
            ratio_scale: DEFAULT_RATIO_SCALE,
        }
    }
}
