pub mod lease_repository;
pub mod regularization_repository;

pub use lease_repository::LeaseRepository;
pub use regularization_repository::RegularizationRepository;
