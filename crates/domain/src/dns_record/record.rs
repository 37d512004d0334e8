use super::RecordType;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

const MIN_TTL: u32 = 10;
const MAX_TTL: u32 = 3_600_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// `@` for the zone apex, otherwise a name relative to the zone.
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub data: String,

    pub ttl: u32,
}

impl Record {
    pub const APEX: &'static str = "@";

    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        data: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            data: data.into(),
            ttl,
        }
    }

    /// Same name, type and data. TTL is not part of a record's identity.
    pub fn same_as(&self, other: &Record) -> bool {
        self.name == other.name && self.record_type == other.record_type && self.data == other.data
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidRecord("record name is empty".to_string()));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidRecord(format!(
                "record name '{}' contains whitespace",
                self.name
            )));
        }
        if self.name.ends_with('.') {
            return Err(DomainError::InvalidRecord(format!(
                "record name '{}' is not inside the zone",
                self.name
            )));
        }
        if self.data.is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "record data for '{}' is empty",
                self.name
            )));
        }
        if !(MIN_TTL..=MAX_TTL).contains(&self.ttl) {
            return Err(DomainError::InvalidRecord(format!(
                "TTL {} out of range ({}..={})",
                self.ttl, MIN_TTL, MAX_TTL
            )));
        }

        match self.record_type {
            RecordType::A if self.data.parse::<Ipv4Addr>().is_err() => Err(
                DomainError::InvalidRecord(format!("'{}' is not an IPv4 address", self.data)),
            ),
            RecordType::AAAA if self.data.parse::<Ipv6Addr>().is_err() => Err(
                DomainError::InvalidRecord(format!("'{}' is not an IPv6 address", self.data)),
            ),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.ttl, self.record_type, self.data
        )
    }
}

/// Rewrites a fully-qualified record name (trailing dot) into the relative
/// form stored by the hosting service. Names without a trailing dot are
/// already relative and are returned unchanged.
pub fn relative_name(name: &str, zone_fqdn: &str) -> String {
    let Some(absolute) = name.strip_suffix('.') else {
        return name.to_string();
    };
    let zone = zone_fqdn.trim_end_matches('.');

    if absolute == zone {
        return Record::APEX.to_string();
    }

    match absolute.strip_suffix(zone).and_then(|s| s.strip_suffix('.')) {
        Some(relative) if !relative.is_empty() => relative.to_string(),
        _ => name.to_string(),
    }
}
