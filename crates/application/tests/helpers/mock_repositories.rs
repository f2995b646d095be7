#![allow(dead_code)]

use async_trait::async_trait;
use plmnscope_application::ports::{NameMatch, OperatorRepository, FUZZY_MATCH_LIMIT};
use plmnscope_domain::{CountryRecord, DomainError, OperatorRecord, PlmnId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockOperatorRepository {
    operators: Arc<RwLock<Vec<OperatorRecord>>>,
    countries: Arc<RwLock<Vec<CountryRecord>>>,
    hostnames: Arc<RwLock<HashMap<String, Vec<String>>>>,
    failing_hostname_lookups: Arc<RwLock<HashSet<String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockOperatorRepository {
    pub fn new() -> Self {
        Self {
            operators: Arc::new(RwLock::new(Vec::new())),
            countries: Arc::new(RwLock::new(Vec::new())),
            hostnames: Arc::new(RwLock::new(HashMap::new())),
            failing_hostname_lookups: Arc::new(RwLock::new(HashSet::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_operator(&self, name: &str, mnc: u16, mcc: u16) {
        self.operators
            .write()
            .await
            .push(OperatorRecord::new(name, mnc, mcc));
    }

    pub async fn add_country(&self, name: &str, code: &str, mcc: u16) {
        self.countries.write().await.push(CountryRecord {
            country_name: name.to_string(),
            country_code: code.to_string(),
            mcc,
        });
    }

    pub async fn set_hostnames(&self, operator: &str, hostnames: &[&str]) {
        self.hostnames.write().await.insert(
            operator.to_string(),
            hostnames.iter().map(|h| h.to_string()).collect(),
        );
    }

    pub async fn fail_hostnames_for(&self, operator: &str) {
        self.failing_hostname_lookups
            .write()
            .await
            .insert(operator.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OperatorRepository for MockOperatorRepository {
    async fn find_by_plmn(&self, mnc: u16, mcc: u16) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check_failure().await?;
        let distinct: BTreeSet<String> = self
            .operators
            .read()
            .await
            .iter()
            .filter(|r| r.mnc == mnc && r.mcc == mcc)
            .map(|r| r.operator.clone())
            .collect();
        Ok(distinct
            .into_iter()
            .map(|name| OperatorRecord::new(name, mnc, mcc))
            .collect())
    }

    async fn find_by_mcc(
        &self,
        mcc: u16,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check_failure().await?;
        let mut rows: Vec<OperatorRecord> = self
            .operators
            .read()
            .await
            .iter()
            .filter(|r| r.mcc == mcc)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.operator.cmp(&b.operator).then(a.mnc.cmp(&b.mnc)));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        self.check_failure().await?;
        let needle = name.to_lowercase();
        let mut rows: Vec<OperatorRecord> = self
            .operators
            .read()
            .await
            .iter()
            .filter(|r| match mode {
                NameMatch::Exact => r.operator == name,
                NameMatch::Fuzzy => r.operator.to_lowercase().contains(&needle),
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.operator.cmp(&b.operator).then(a.mnc.cmp(&b.mnc)));
        if mode == NameMatch::Fuzzy {
            rows.truncate(FUZZY_MATCH_LIMIT as usize);
        }
        Ok(rows)
    }

    async fn find_countries(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<CountryRecord>, DomainError> {
        self.check_failure().await?;
        let needle = name.to_lowercase();
        Ok(self
            .countries
            .read()
            .await
            .iter()
            .filter(|c| c.country_name.to_lowercase().contains(&needle))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn hostnames_for_operator(&self, operator: &str) -> Result<Vec<String>, DomainError> {
        self.check_failure().await?;
        if self.failing_hostname_lookups.read().await.contains(operator) {
            return Err(DomainError::DatabaseError(format!(
                "hostname lookup failed for {}",
                operator
            )));
        }
        let mut hostnames = self
            .hostnames
            .read()
            .await
            .get(operator)
            .cloned()
            .unwrap_or_default();
        hostnames.sort();
        Ok(hostnames)
    }

    async fn plmns_for_operator(&self, operator: &str) -> Result<Vec<PlmnId>, DomainError> {
        self.check_failure().await?;
        let plmns: BTreeSet<PlmnId> = self
            .operators
            .read()
            .await
            .iter()
            .filter(|r| r.operator == operator)
            .map(OperatorRecord::plmn)
            .collect();
        Ok(plmns.into_iter().collect())
    }
}
