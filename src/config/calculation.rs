use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::core::money::{DEFAULT_RATIO_SCALE, MAX_RATIO_SCALE, MIN_RATIO_SCALE};
use crate::core::{AppError, Result};
use crate::modules::regularizations::models::{CalculationMethod, CalculationOptions};

/// Regularization defaults read from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationConfig {
    pub method: CalculationMethod,
    pub balance_epsilon: Decimal,
    pub ratio_scale: u32,
}

impl CalculationConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let method = match lookup("REGULARIZATION_METHOD") {
            Some(value) => value
                .parse::<CalculationMethod>()
                .map_err(AppError::Configuration)?,
            None => CalculationMethod::default(),
        };

        let balance_epsilon = match lookup("REGULARIZATION_BALANCE_EPSILON") {
            Some(value) => Decimal::from_str(value.trim()).map_err(|_| {
                AppError::Configuration("Invalid REGULARIZATION_BALANCE_EPSILON".to_string())
            })?,
            None => CalculationOptions::default().balance_epsilon,
        };

        let ratio_scale = lookup("REGULARIZATION_RATIO_SCALE")
            .unwrap_or_else(|| DEFAULT_RATIO_SCALE.to_string())
            .trim()
            .parse::<u32>()
            .map_err(|_| {
                AppError::Configuration("Invalid REGULARIZATION_RATIO_SCALE".to_string())
            })?;

        Ok(CalculationConfig {
            method,
            balance_epsilon,
            ratio_scale,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.balance_epsilon < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Balance epsilon cannot be negative".to_string(),
            ));
        }

        if !(MIN_RATIO_SCALE..=MAX_RATIO_SCALE).contains(&self.ratio_scale) {
            return Err(AppError::Configuration(format!(
                "Ratio scale must be between {} and {}",
                MIN_RATIO_SCALE, MAX_RATIO_SCALE
            )));
        }

        Ok(())
    }

    pub fn options(&self) -> CalculationOptions {
        CalculationOptions {
            method: self.method,
            balance_epsilon: self.balance_epsilon,
            ratio_scale: self.ratio_scale,
        }
    }
}
