pub mod models;
pub mod services;

pub use models::{RentRevision, RentRevisionRequest};
pub use services::RentRevisionCalculator;
