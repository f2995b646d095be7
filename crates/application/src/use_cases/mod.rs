pub mod infrastructure;

pub use infrastructure::{InfrastructureLookup, InfrastructureQuery, LookupInfrastructureUseCase};
