pub mod lookup_infrastructure;

pub use lookup_infrastructure::{
    InfrastructureLookup, InfrastructureQuery, LookupInfrastructureUseCase,
};
