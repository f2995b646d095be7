pub mod operator_repository;

pub use operator_repository::SqliteOperatorRepository;
