pub mod repository;

pub use repository::KeyedRepository;
