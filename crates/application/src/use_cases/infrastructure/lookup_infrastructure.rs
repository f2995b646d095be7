use plmnscope_domain::{
    CountryRecord, DomainError, InfrastructureReport, OperatorIdentity, OperatorRecord, PlmnId,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ports::{NameMatch, OperatorRepository};
use crate::services::InfrastructureAggregator;

const MAX_SUGGESTIONS: usize = 10;
const COUNTRY_MATCH_LIMIT: u32 = 5;
const MCC_ROW_LIMIT: u32 = 100;

/// What the caller is looking up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfrastructureQuery {
    Operator(String),
    Plmn { mnc: u16, mcc: u16 },
    Mcc(u16),
    Country(String),
}

#[derive(Debug, Clone)]
pub enum InfrastructureLookup {
    /// One report per operator that has candidate hostnames.
    Reports(Vec<InfrastructureReport>),
    /// The operator name matched several operators fuzzily.
    Suggestions(Vec<String>),
    /// The country name matched more than one country.
    AmbiguousCountry(Vec<CountryRecord>),
}

pub struct LookupInfrastructureUseCase {
    repository: Arc<dyn OperatorRepository>,
    aggregator: Arc<InfrastructureAggregator>,
    concurrency: usize,
    timeout: Duration,
}

impl LookupInfrastructureUseCase {
    pub fn new(
        repository: Arc<dyn OperatorRepository>,
        aggregator: Arc<InfrastructureAggregator>,
    ) -> Self {
        Self {
            repository,
            aggregator,
            concurrency: 10,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_resolution(mut self, concurrency: usize, timeout: Duration) -> Self {
        self.concurrency = concurrency.max(1);
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        query: InfrastructureQuery,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        match query {
            InfrastructureQuery::Operator(name) => {
                self.lookup_operator(&name, include_unresolved).await
            }
            InfrastructureQuery::Plmn { mnc, mcc } => {
                self.lookup_plmn(mnc, mcc, include_unresolved).await
            }
            InfrastructureQuery::Mcc(mcc) => self.lookup_mcc(mcc, include_unresolved).await,
            InfrastructureQuery::Country(name) => {
                self.lookup_country(&name, include_unresolved).await
            }
        }
    }

    async fn lookup_operator(
        &self,
        name: &str,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput(
                "Operator name cannot be empty".to_string(),
            ));
        }

        let mut rows = self.repository.find_by_name(name, NameMatch::Exact).await?;

        if rows.is_empty() {
            rows = self.repository.find_by_name(name, NameMatch::Fuzzy).await?;

            if rows.is_empty() {
                return Err(DomainError::NotFound(format!(
                    "No operator found matching: {}",
                    name
                )));
            }

            let distinct: BTreeSet<&str> = rows.iter().map(|r| r.operator.as_str()).collect();
            if distinct.len() > 1 {
                debug!(query = %name, matches = distinct.len(), "Operator name is ambiguous");
                return Ok(InfrastructureLookup::Suggestions(
                    distinct
                        .into_iter()
                        .take(MAX_SUGGESTIONS)
                        .map(String::from)
                        .collect(),
                ));
            }
        }

        let identities = OperatorIdentity::group_records(&rows);
        self.build_reports(identities, include_unresolved).await
    }

    async fn lookup_plmn(
        &self,
        mnc: u16,
        mcc: u16,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        let mnc = PlmnId::validate_code("MNC", i64::from(mnc)).map_err(DomainError::InvalidInput)?;
        let mcc = PlmnId::validate_code("MCC", i64::from(mcc)).map_err(DomainError::InvalidInput)?;

        let rows = self.repository.find_by_plmn(mnc, mcc).await?;
        if rows.is_empty() {
            return Err(DomainError::NotFound(format!(
                "No operator found for MCC {} / MNC {}",
                mcc, mnc
            )));
        }

        let names: BTreeSet<&str> = rows.iter().map(|r| r.operator.as_str()).collect();
        let mut identities = Vec::with_capacity(names.len());

        for name in names {
            let plmns = match self.repository.plmns_for_operator(name).await {
                Ok(plmns) if !plmns.is_empty() => plmns,
                Ok(_) => vec![PlmnId::new(mnc, mcc)],
                Err(e) => {
                    warn!(operator = %name, error = %e, "Failed to load operator PLMNs");
                    vec![PlmnId::new(mnc, mcc)]
                }
            };
            identities.push(OperatorIdentity::new(name, plmns));
        }

        self.build_reports(identities, include_unresolved).await
    }

    async fn lookup_mcc(
        &self,
        mcc: u16,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        let mcc = PlmnId::validate_code("MCC", i64::from(mcc)).map_err(DomainError::InvalidInput)?;

        let rows: Vec<OperatorRecord> = self.repository.find_by_mcc(mcc, MCC_ROW_LIMIT, 0).await?;
        if rows.is_empty() {
            return Err(DomainError::NotFound(format!(
                "No operators found for MCC {}",
                mcc
            )));
        }

        let identities = OperatorIdentity::group_records(&rows);
        self.build_reports(identities, include_unresolved).await
    }

    async fn lookup_country(
        &self,
        name: &str,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput(
                "Country name cannot be empty".to_string(),
            ));
        }

        let mut countries = self
            .repository
            .find_countries(name, COUNTRY_MATCH_LIMIT)
            .await?;

        match countries.len() {
            0 => Err(DomainError::NotFound(format!(
                "No country found matching: {}",
                name
            ))),
            1 => {
                let country = countries.remove(0);
                debug!(country = %country.country_name, mcc = country.mcc, "Country resolved");
                self.lookup_mcc(country.mcc, include_unresolved).await
            }
            _ => Ok(InfrastructureLookup::AmbiguousCountry(countries)),
        }
    }

    async fn build_reports(
        &self,
        identities: Vec<OperatorIdentity>,
        include_unresolved: bool,
    ) -> Result<InfrastructureLookup, DomainError> {
        let mut reports = Vec::with_capacity(identities.len());

        for identity in identities {
            let hostnames = match self.repository.hostnames_for_operator(&identity.name).await {
                Ok(hostnames) if hostnames.is_empty() => {
                    debug!(operator = %identity.name, "Operator has no candidate hostnames");
                    continue;
                }
                Ok(hostnames) => hostnames,
                Err(e) => {
                    warn!(operator = %identity.name, error = %e, "Failed to load candidate hostnames");
                    continue;
                }
            };

            let report = self
                .aggregator
                .build_report(
                    identity,
                    &hostnames,
                    self.concurrency,
                    self.timeout,
                    include_unresolved,
                )
                .await;

            info!(
                operator = %report.operator.name,
                total = report.total_candidates,
                active = report.active_count,
                duration_ms = report.resolution_duration_ms,
                "Infrastructure lookup completed"
            );

            reports.push(report);
        }

        Ok(InfrastructureLookup::Reports(reports))
    }
}
