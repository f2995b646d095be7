mod clock;
mod host_resolver;
mod operator_repository;

pub use clock::Clock;
pub use host_resolver::HostResolver;
pub use operator_repository::{NameMatch, OperatorRepository, FUZZY_MATCH_LIMIT};
