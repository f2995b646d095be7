#![allow(dead_code)]

use async_trait::async_trait;
use plmnscope_api::{create_api_routes, AppState};
use plmnscope_application::ports::{Clock, HostResolver, NameMatch, OperatorRepository};
use plmnscope_application::services::{
    InfrastructureAggregator, ResolutionFanOut, SlidingWindowRateLimiter,
};
use plmnscope_application::use_cases::LookupInfrastructureUseCase;
use plmnscope_domain::{AddressSet, CountryRecord, DomainError, OperatorRecord, PlmnId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const ADMIN: &str = "admin-1";

pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance_secs(&self, secs: u64) {
        *self.offset.lock().unwrap() += Duration::from_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}

pub struct StaticResolver {
    answers: HashMap<String, AddressSet>,
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, hostname: &str, _timeout: Duration) -> AddressSet {
        self.answers.get(hostname).cloned().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

pub struct StaticOperatorRepository {
    operators: Vec<OperatorRecord>,
    countries: Vec<CountryRecord>,
    hostnames: HashMap<String, Vec<String>>,
    fail: bool,
}

impl StaticOperatorRepository {
    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OperatorRepository for StaticOperatorRepository {
    async fn find_by_plmn(&self, mnc: u16, mcc: u16) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check()?;
        Ok(self
            .operators
            .iter()
            .filter(|r| r.mnc == mnc && r.mcc == mcc)
            .cloned()
            .collect())
    }

    async fn find_by_mcc(
        &self,
        mcc: u16,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check()?;
        Ok(self
            .operators
            .iter()
            .filter(|r| r.mcc == mcc)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check()?;
        let needle = name.to_lowercase();
        Ok(self
            .operators
            .iter()
            .filter(|r| match mode {
                NameMatch::Exact => r.operator == name,
                NameMatch::Fuzzy => r.operator.to_lowercase().contains(&needle),
            })
            .cloned()
            .collect())
    }

    async fn find_countries(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<CountryRecord>, DomainError> {
        self.check()?;
        let needle = name.to_lowercase();
        Ok(self
            .countries
            .iter()
            .filter(|c| c.country_name.to_lowercase().contains(&needle))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn hostnames_for_operator(&self, operator: &str) -> Result<Vec<String>, DomainError> {
        self.check()?;
        Ok(self.hostnames.get(operator).cloned().unwrap_or_default())
    }

    async fn plmns_for_operator(&self, operator: &str) -> Result<Vec<PlmnId>, DomainError> {
        self.check()?;
        let plmns: BTreeSet<PlmnId> = self
            .operators
            .iter()
            .filter(|r| r.operator == operator)
            .map(OperatorRecord::plmn)
            .collect();
        Ok(plmns.into_iter().collect())
    }
}

pub struct TestApp {
    pub router: axum::Router,
    pub clock: Arc<ManualClock>,
    pub limiter: Arc<SlidingWindowRateLimiter>,
}

pub fn build_app(max_per_minute: u32, max_per_hour: u32) -> TestApp {
    build_app_with(max_per_minute, max_per_hour, false)
}

pub fn build_app_with(max_per_minute: u32, max_per_hour: u32, failing_store: bool) -> TestApp {
    let repository = StaticOperatorRepository {
        operators: vec![
            OperatorRecord::new("Alpha Telecom", 1, 232),
            OperatorRecord::new("Alpha Telecom", 11, 232),
            OperatorRecord::new("Beta Mobile", 3, 232),
        ],
        countries: vec![
            CountryRecord {
                country_name: "Austria".to_string(),
                country_code: "AT".to_string(),
                mcc: 232,
            },
            CountryRecord {
                country_name: "Guinea".to_string(),
                country_code: "GN".to_string(),
                mcc: 611,
            },
            CountryRecord {
                country_name: "Papua New Guinea".to_string(),
                country_code: "PG".to_string(),
                mcc: 537,
            },
        ],
        hostnames: HashMap::from([
            (
                "Alpha Telecom".to_string(),
                vec![
                    "ims.alpha.example".to_string(),
                    "epdg.alpha.example".to_string(),
                ],
            ),
            (
                "Beta Mobile".to_string(),
                vec!["epdg.beta.example".to_string()],
            ),
        ]),
        fail: failing_store,
    };

    let resolver = StaticResolver {
        answers: HashMap::from([
            (
                "epdg.alpha.example".to_string(),
                AddressSet::from(["10.1.0.2".to_string(), "10.1.0.1".to_string()]),
            ),
            (
                "epdg.beta.example".to_string(),
                AddressSet::from(["2001:db8::2".to_string()]),
            ),
        ]),
    };

    let fan_out = Arc::new(ResolutionFanOut::new(Arc::new(resolver), 8));
    let aggregator = Arc::new(InfrastructureAggregator::new(fan_out));
    let lookup = Arc::new(
        LookupInfrastructureUseCase::new(Arc::new(repository), aggregator)
            .with_resolution(4, Duration::from_secs(1)),
    );

    let clock = Arc::new(ManualClock::new());
    let limiter = Arc::new(SlidingWindowRateLimiter::new(
        max_per_minute,
        max_per_hour,
        HashSet::from([ADMIN.to_string()]),
        clock.clone() as Arc<dyn Clock>,
    ));

    let router = create_api_routes(AppState {
        lookup,
        limiter: limiter.clone(),
    });

    TestApp {
        router,
        clock,
        limiter,
    }
}
