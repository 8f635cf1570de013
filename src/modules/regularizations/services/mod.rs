pub mod balance_calculator;
pub mod charge_prorator;
pub mod occupancy_resolver;
pub mod regularization_calculator;
pub mod regularization_service;

pub use balance_calculator::{reconcile, Reconciliation};
pub use charge_prorator::{prorate_charges, prorate_window_charges};
pub use occupancy_resolver::resolve_occupancy_window;
pub use regularization_calculator::RegularizationCalculator;
pub use regularization_service::RegularizationService;
