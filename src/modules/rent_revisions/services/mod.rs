pub mod rent_revision_calculator;

pub use rent_revision_calculator::RentRevisionCalculator;
