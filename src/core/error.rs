use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Precondition failures raised by the regularization and revision calculators.
///
/// These are local validation failures: retrying with the same input always
/// fails the same way.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// The lease and the target year share no day, or the dates are inverted
    #[error("Invalid period: {reason}")]
    InvalidPeriod { reason: String },

    /// A charge amount is negative or was not a finite number
    #[error("Invalid amount for charge '{category}': {amount}")]
    InvalidChargeAmount { category: String, amount: String },

    /// No charge item supplied
    #[error("At least one charge item is required")]
    NoChargeItems,

    /// Collected provisions are negative or were not a finite number
    #[error("Invalid provisions amount: {amount}")]
    InvalidProvisionsAmount { amount: String },

    /// A reference index is zero or negative
    #[error("Invalid reference index value: {index}")]
    InvalidIndexValue { index: Decimal },
}

impl CalculationError {
    pub fn invalid_period(reason: impl Into<String>) -> Self {
        CalculationError::InvalidPeriod {
            reason: reason.into(),
        }
    }

    pub fn invalid_charge_amount(category: impl Into<String>, amount: impl ToString) -> Self {
        CalculationError::InvalidChargeAmount {
            category: category.into(),
            amount: amount.to_string(),
        }
    }

    pub fn invalid_provisions_amount(amount: impl ToString) -> Self {
        CalculationError::InvalidProvisionsAmount {
            amount: amount.to_string(),
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Calculator precondition failures
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Persistence adapter errors
    #[error("Repository error: {0}")]
    Repository(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input/output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn repository(msg: impl Into<String>) -> Self {
        AppError::Repository(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Returns the calculator failure wrapped by this error, if any
    pub fn as_calculation(&self) -> Option<&CalculationError> {
        match self {
            AppError::Calculation(err) => Some(err),
            _ => None,
        }
    }
}
