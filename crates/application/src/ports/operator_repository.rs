use async_trait::async_trait;
use plmnscope_domain::{CountryRecord, DomainError, OperatorRecord, PlmnId};

pub const FUZZY_MATCH_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Exact,
    /// Case-insensitive substring, at most [`FUZZY_MATCH_LIMIT`] rows.
    Fuzzy,
}

/// Read-only view of the operator record store.
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    async fn find_by_plmn(&self, mnc: u16, mcc: u16) -> Result<Vec<OperatorRecord>, DomainError>;

    async fn find_by_mcc(
        &self,
        mcc: u16,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<OperatorRecord>, DomainError>;

    async fn find_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Vec<OperatorRecord>, DomainError>;

    async fn find_countries(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<CountryRecord>, DomainError>;

    async fn hostnames_for_operator(&self, operator: &str) -> Result<Vec<String>, DomainError>;

    async fn plmns_for_operator(&self, operator: &str) -> Result<Vec<PlmnId>, DomainError>;
}
