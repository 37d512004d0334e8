use crate::{DomainError, Record, RecordType};
use serde::{Deserialize, Serialize};

/// A hosted DNS zone and its authoritative nameservers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,

    /// Zone name without the trailing dot, e.g. `example.com`.
    pub fqdn: String,

    /// Authoritative nameservers, in the order they should be asked.
    pub nameservers: Vec<String>,

    #[serde(default)]
    pub records: Vec<Record>,
}

impl Zone {
    pub fn new(id: impl Into<String>, fqdn: impl Into<String>, nameservers: Vec<String>) -> Self {
        Self {
            id: id.into(),
            fqdn: fqdn.into(),
            nameservers,
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Absolute (trailing-dot) owner name of a record name within this zone.
    pub fn qualify(&self, name: &str) -> String {
        let zone = self.fqdn.trim_end_matches('.');
        if name == Record::APEX {
            format!("{}.", zone)
        } else {
            format!("{}.{}.", name, zone)
        }
    }

    pub fn find_record(&self, name: &str, record_type: RecordType, data: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.name == name && r.record_type == record_type && r.data == data)
    }

    /// Current records plus `record`. Fails if an identical record exists.
    pub fn records_with_added(&self, record: Record) -> Result<Vec<Record>, DomainError> {
        if let Some(existing) = self.find_record(&record.name, record.record_type, &record.data) {
            return Err(DomainError::RecordExists {
                record: existing.to_string(),
                zone: self.fqdn.clone(),
            });
        }
        let mut records = self.records.clone();
        records.push(record);
        Ok(records)
    }

    /// Current records with every record of the same name and type replaced by `record`.
    pub fn records_with_replaced(&self, record: Record) -> Vec<Record> {
        let mut records: Vec<Record> = self
            .records
            .iter()
            .filter(|r| !(r.name == record.name && r.record_type == record.record_type))
            .cloned()
            .collect();
        records.push(record);
        records
    }

    /// Current records minus those identical to `record`, and how many were removed.
    pub fn records_without(&self, record: &Record) -> (Vec<Record>, usize) {
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|r| !r.same_as(record))
            .cloned()
            .collect();
        let removed = self.records.len() - records.len();
        (records, removed)
    }
}
