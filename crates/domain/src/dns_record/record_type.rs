use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types accepted by the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    AAAA,
    ALIAS,
    CNAME,
    NS,
    MX,
    TXT,
    SRV,
    CAA,
    PTR,
    HTTPS,
    SVCB,
}

impl RecordType {
    pub const ALL: [RecordType; 12] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::ALIAS,
        RecordType::CNAME,
        RecordType::NS,
        RecordType::MX,
        RecordType::TXT,
        RecordType::SRV,
        RecordType::CAA,
        RecordType::PTR,
        RecordType::HTTPS,
        RecordType::SVCB,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::ALIAS => "ALIAS",
            RecordType::CNAME => "CNAME",
            RecordType::NS => "NS",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::PTR => "PTR",
            RecordType::HTTPS => "HTTPS",
            RecordType::SVCB => "SVCB",
        }
    }

    /// Only TXT and CNAME answers can be compared against the submitted data.
    pub fn supports_propagation_check(&self) -> bool {
        matches!(self, RecordType::TXT | RecordType::CNAME)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        RecordType::ALL
            .into_iter()
            .find(|rt| rt.as_str() == upper)
            .ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))
    }
}
