use plmnscope_application::services::SlidingWindowRateLimiter;
use plmnscope_application::use_cases::LookupInfrastructureUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupInfrastructureUseCase>,
    pub limiter: Arc<SlidingWindowRateLimiter>,
}
