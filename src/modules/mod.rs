pub mod regularizations;
pub mod rent_revisions;
