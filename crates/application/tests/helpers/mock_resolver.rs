#![allow(dead_code)]

use async_trait::async_trait;
use plmnscope_application::ports::HostResolver;
use plmnscope_domain::AddressSet;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Clone)]
pub struct MockHostResolver {
    responses: Arc<RwLock<HashMap<String, AddressSet>>>,
    panic_on: Arc<RwLock<HashSet<String>>>,
    hang_on: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<HashMap<String, u64>>>,
    delay: Arc<RwLock<Duration>>,
    total_calls: Arc<AtomicU64>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            panic_on: Arc::new(RwLock::new(HashSet::new())),
            hang_on: Arc::new(RwLock::new(HashSet::new())),
            calls: Arc::new(RwLock::new(HashMap::new())),
            delay: Arc::new(RwLock::new(Duration::ZERO)),
            total_calls: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak_in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_response(&self, hostname: &str, ips: &[&str]) {
        self.responses.write().unwrap().insert(
            hostname.to_string(),
            ips.iter().map(|ip| ip.to_string()).collect(),
        );
    }

    pub fn panic_on(&self, hostname: &str) {
        self.panic_on.write().unwrap().insert(hostname.to_string());
    }

    pub fn hang_on(&self, hostname: &str) {
        self.hang_on.write().unwrap().insert(hostname.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = delay;
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls.load(Ordering::SeqCst)
    }

    pub fn calls_for(&self, hostname: &str) -> u64 {
        self.calls
            .read()
            .unwrap()
            .get(hostname)
            .copied()
            .unwrap_or(0)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve(&self, hostname: &str, _timeout: Duration) -> AddressSet {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .write()
            .unwrap()
            .entry(hostname.to_string())
            .or_insert(0) += 1;

        if self.panic_on.read().unwrap().contains(hostname) {
            panic!("resolver blew up on {}", hostname);
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        let hangs = self.hang_on.read().unwrap().contains(hostname);
        if hangs {
            std::future::pending::<()>().await;
        }

        let delay = *self.delay.read().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .unwrap()
            .get(hostname)
            .cloned()
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
