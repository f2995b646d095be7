use plmnscope_application::use_cases::InfrastructureLookup;
use plmnscope_domain::{CountryRecord, InfrastructureReport, PlmnId, ResolvedHost};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct InfrastructureParams {
    /// Include hostnames that did not resolve.
    #[serde(default)]
    pub all: bool,
}

#[derive(Serialize, Debug)]
pub struct PlmnResponse {
    pub mcc: u16,
    pub mnc: u16,
    pub label: String,
}

impl From<&PlmnId> for PlmnResponse {
    fn from(plmn: &PlmnId) -> Self {
        Self {
            mcc: plmn.mcc,
            mnc: plmn.mnc,
            label: plmn.namespace_label(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HostResponse {
    pub hostname: String,
    pub ips: Vec<String>,
    pub resolved: bool,
}

impl From<ResolvedHost> for HostResponse {
    fn from(host: ResolvedHost) -> Self {
        Self {
            hostname: host.hostname,
            ips: host.ips,
            resolved: host.resolved,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ReportResponse {
    pub operator: String,
    pub plmns: Vec<PlmnResponse>,
    pub total_candidates: usize,
    pub active_count: usize,
    pub inactive_count: usize,
    pub include_unresolved: bool,
    pub resolution_duration_ms: u64,
    pub hosts: Vec<HostResponse>,
}

impl From<InfrastructureReport> for ReportResponse {
    fn from(report: InfrastructureReport) -> Self {
        Self {
            plmns: report.operator.plmns.iter().map(PlmnResponse::from).collect(),
            operator: report.operator.name,
            total_candidates: report.total_candidates,
            active_count: report.active_count,
            inactive_count: report.inactive_count,
            include_unresolved: report.include_unresolved,
            resolution_duration_ms: report.resolution_duration_ms,
            hosts: report.hosts.into_iter().map(HostResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CountryResponse {
    pub country_name: String,
    pub country_code: String,
    pub mcc: u16,
}

impl From<CountryRecord> for CountryResponse {
    fn from(country: CountryRecord) -> Self {
        Self {
            country_name: country.country_name,
            country_code: country.country_code,
            mcc: country.mcc,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupResponse {
    Reports { reports: Vec<ReportResponse> },
    Suggestions { suggestions: Vec<String> },
    AmbiguousCountry { countries: Vec<CountryResponse> },
}

impl From<InfrastructureLookup> for LookupResponse {
    fn from(lookup: InfrastructureLookup) -> Self {
        match lookup {
            InfrastructureLookup::Reports(reports) => Self::Reports {
                reports: reports.into_iter().map(ReportResponse::from).collect(),
            },
            InfrastructureLookup::Suggestions(suggestions) => Self::Suggestions { suggestions },
            InfrastructureLookup::AmbiguousCountry(countries) => Self::AmbiguousCountry {
                countries: countries.into_iter().map(CountryResponse::from).collect(),
            },
        }
    }
}
