use async_trait::async_trait;
use plmnscope_application::ports::{NameMatch, OperatorRepository, FUZZY_MATCH_LIMIT};
use plmnscope_domain::{CountryRecord, DomainError, OperatorRecord, PlmnId};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type OperatorRow = (String, i64, i64);
type CountryRow = (String, String, String);

pub struct SqliteOperatorRepository {
    pool: SqlitePool,
}

impl SqliteOperatorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_operator(row: OperatorRow) -> Option<OperatorRecord> {
        let (operator, mnc, mcc) = row;
        match (u16::try_from(mnc), u16::try_from(mcc)) {
            (Ok(mnc), Ok(mcc)) => Some(OperatorRecord { operator, mnc, mcc }),
            _ => {
                warn!(operator = %operator, mnc, mcc, "Skipping operator row with invalid codes");
                None
            }
        }
    }

    fn row_to_country(row: CountryRow) -> Option<CountryRecord> {
        let (country_name, country_code, mcc) = row;
        match mcc.trim().parse::<u16>() {
            Ok(mcc) => Some(CountryRecord {
                country_name,
                country_code,
                mcc,
            }),
            Err(_) => {
                warn!(country = %country_name, mcc = %mcc, "Skipping country row with invalid MCC");
                None
            }
        }
    }

    fn db_error(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
        move |e| {
            error!(error = %e, "{}", context);
            DomainError::DatabaseError(e.to_string())
        }
    }
}

/// `%term%` with LIKE wildcards in the term itself escaped.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl OperatorRepository for SqliteOperatorRepository {
    #[instrument(skip(self))]
    async fn find_by_plmn(&self, mnc: u16, mcc: u16) -> Result<Vec<OperatorRecord>, DomainError> {
        let rows = sqlx::query_as::<_, OperatorRow>(
            "SELECT DISTINCT operator, mnc, mcc FROM operators
             WHERE mnc = ? AND mcc = ?
             ORDER BY operator",
        )
        .bind(i64::from(mnc))
        .bind(i64::from(mcc))
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query operators by PLMN"))?;

        Ok(rows.into_iter().filter_map(Self::row_to_operator).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_mcc(
        &self,
        mcc: u16,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        let rows = sqlx::query_as::<_, OperatorRow>(
            "SELECT operator, mnc, mcc FROM operators
             WHERE mcc = ?
             ORDER BY operator, mnc
             LIMIT ? OFFSET ?",
        )
        .bind(i64::from(mcc))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query operators by MCC"))?;

        Ok(rows.into_iter().filter_map(Self::row_to_operator).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Vec<OperatorRecord>, DomainError> {
        let rows = match mode {
            NameMatch::Exact => {
                sqlx::query_as::<_, OperatorRow>(
                    "SELECT operator, mnc, mcc FROM operators
                     WHERE operator = ?
                     ORDER BY mnc",
                )
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
            NameMatch::Fuzzy => {
                sqlx::query_as::<_, OperatorRow>(
                    "SELECT operator, mnc, mcc FROM operators
                     WHERE LOWER(operator) LIKE LOWER(?) ESCAPE '\\'
                     ORDER BY operator, mnc
                     LIMIT ?",
                )
                .bind(contains_pattern(name))
                .bind(i64::from(FUZZY_MATCH_LIMIT))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(Self::db_error("Failed to query operators by name"))?;

        Ok(rows.into_iter().filter_map(Self::row_to_operator).collect())
    }

    #[instrument(skip(self))]
    async fn find_countries(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<CountryRecord>, DomainError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            "SELECT country_name, country_code, mcc FROM countries
             WHERE LOWER(country_name) LIKE LOWER(?) ESCAPE '\\'
             ORDER BY country_name
             LIMIT ?",
        )
        .bind(contains_pattern(name))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query countries"))?;

        Ok(rows.into_iter().filter_map(Self::row_to_country).collect())
    }

    #[instrument(skip(self))]
    async fn hostnames_for_operator(&self, operator: &str) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT DISTINCT fqdn FROM available_fqdns
             WHERE operator = ?
             ORDER BY fqdn",
        )
        .bind(operator)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query candidate hostnames"))?;

        Ok(rows
            .into_iter()
            .map(|(fqdn,)| fqdn.trim().to_string())
            .filter(|fqdn| !fqdn.is_empty())
            .collect())
    }

    #[instrument(skip(self))]
    async fn plmns_for_operator(&self, operator: &str) -> Result<Vec<PlmnId>, DomainError> {
        let rows = sqlx::query_as::<_, OperatorRow>(
            "SELECT DISTINCT operator, mnc, mcc FROM operators
             WHERE operator = ?
             ORDER BY mnc, mcc",
        )
        .bind(operator)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("Failed to query operator PLMNs"))?;

        Ok(rows
            .into_iter()
            .filter_map(Self::row_to_operator)
            .map(|record| record.plmn())
            .collect())
    }
}
