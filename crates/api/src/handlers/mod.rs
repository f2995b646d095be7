pub mod health;
pub mod infrastructure;
pub mod rate_limit;

pub use health::health_check;
pub use infrastructure::{
    get_country_infrastructure, get_mcc_infrastructure, get_operator_infrastructure,
    get_plmn_infrastructure,
};
pub use rate_limit::{get_limiter_stats, get_my_usage};
