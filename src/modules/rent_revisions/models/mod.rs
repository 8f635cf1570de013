pub mod rent_revision;

pub use rent_revision::{RentRevision, RentRevisionRequest};
