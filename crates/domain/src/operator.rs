use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Highest value a three-digit MCC or MNC can take.
pub const MAX_PLMN_CODE: u16 = 999;

/// A (network code, country code) pair identifying one mobile network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlmnId {
    pub mnc: u16,
    pub mcc: u16,
}

impl PlmnId {
    pub fn new(mnc: u16, mcc: u16) -> Self {
        Self { mnc, mcc }
    }

    pub fn validate_code(kind: &str, code: i64) -> Result<u16, String> {
        if !(0..=MAX_PLMN_CODE as i64).contains(&code) {
            return Err(format!("{} must be between 0 and {}", kind, MAX_PLMN_CODE));
        }
        Ok(code as u16)
    }

    /// Label used under the 3GPP public namespace, e.g. `mnc001.mcc232`.
    pub fn namespace_label(&self) -> String {
        format!("mnc{:03}.mcc{:03}", self.mnc, self.mcc)
    }
}

impl fmt::Display for PlmnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mcc, self.mnc)
    }
}

/// One row of the operator table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub operator: String,
    pub mnc: u16,
    pub mcc: u16,
}

impl OperatorRecord {
    pub fn new(operator: impl Into<String>, mnc: u16, mcc: u16) -> Self {
        Self {
            operator: operator.into(),
            mnc,
            mcc,
        }
    }

    pub fn plmn(&self) -> PlmnId {
        PlmnId::new(self.mnc, self.mcc)
    }
}

/// An operator together with every PLMN it appears under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorIdentity {
    pub name: String,
    pub plmns: Vec<PlmnId>,
}

impl OperatorIdentity {
    pub fn new(name: impl Into<String>, plmns: impl IntoIterator<Item = PlmnId>) -> Self {
        let plmns: BTreeSet<PlmnId> = plmns.into_iter().collect();
        Self {
            name: name.into(),
            plmns: plmns.into_iter().collect(),
        }
    }

    /// Groups rows by operator name. Output is sorted by name; each operator's
    /// PLMN list is sorted and free of duplicates.
    pub fn group_records(records: &[OperatorRecord]) -> Vec<OperatorIdentity> {
        let mut grouped: BTreeMap<&str, BTreeSet<PlmnId>> = BTreeMap::new();
        for record in records {
            grouped
                .entry(record.operator.as_str())
                .or_default()
                .insert(record.plmn());
        }

        grouped
            .into_iter()
            .map(|(name, plmns)| OperatorIdentity::new(name, plmns))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_name: String,
    pub country_code: String,
    pub mcc: u16,
}
