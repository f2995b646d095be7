pub mod caller;
pub mod rate_limit;

pub use caller::{caller_id_from_headers, missing_caller_response, CALLER_ID_HEADER};
pub use rate_limit::enforce_rate_limit;
