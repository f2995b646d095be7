mod mock_clock;
mod mock_repositories;
mod mock_resolver;

pub use mock_clock::*;
pub use mock_repositories::*;
pub use mock_resolver::*;
