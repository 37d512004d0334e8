//! Wire shapes of the Sakura Cloud `commonserviceitem` resource (DNS provider).

use sakura_dns_domain::{DomainError, Record, RecordType, Zone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommonServiceItemList {
    #[serde(rename = "Total", default)]
    pub total: u64,

    #[serde(rename = "CommonServiceItems", default)]
    pub items: Vec<CommonServiceItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonServiceItemEnvelope {
    #[serde(rename = "CommonServiceItem")]
    pub item: CommonServiceItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonServiceItem {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Status", default)]
    pub status: DnsStatus,

    #[serde(rename = "Settings", default)]
    pub settings: DnsSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsStatus {
    #[serde(rename = "Zone", default)]
    pub zone: String,

    #[serde(rename = "NS", default)]
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsSettings {
    #[serde(rename = "DNS", default)]
    pub dns: ResourceRecordSets,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRecordSets {
    #[serde(rename = "ResourceRecordSets", default)]
    pub records: Vec<ResourceRecordSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub record_type: String,

    #[serde(rename = "RData")]
    pub rdata: String,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,
}

/// Body of `PUT commonserviceitem/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest {
    #[serde(rename = "CommonServiceItem")]
    pub item: UpdateItem,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateItem {
    #[serde(rename = "Settings")]
    pub settings: DnsSettings,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub error_msg: Option<String>,
}

impl UpdateRequest {
    pub fn new(records: &[Record]) -> Self {
        Self {
            item: UpdateItem {
                settings: DnsSettings {
                    dns: ResourceRecordSets {
                        records: records.iter().map(ResourceRecordSet::from).collect(),
                    },
                },
            },
        }
    }
}

impl From<&Record> for ResourceRecordSet {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type.to_string(),
            rdata: record.data.clone(),
            ttl: record.ttl,
        }
    }
}

impl ResourceRecordSet {
    /// Unknown types are an error: dropping them would delete them on the next update.
    pub fn to_record(&self) -> Result<Record, DomainError> {
        let record_type: RecordType = self.record_type.parse().map_err(|_| {
            DomainError::HostingApi(format!(
                "unsupported record type '{}' for '{}'",
                self.record_type, self.name
            ))
        })?;
        Ok(Record::new(
            self.name.clone(),
            record_type,
            self.rdata.clone(),
            self.ttl,
        ))
    }
}

impl CommonServiceItem {
    pub fn into_zone(self) -> Result<Zone, DomainError> {
        let records = self
            .settings
            .dns
            .records
            .iter()
            .map(ResourceRecordSet::to_record)
            .collect::<Result<Vec<_>, _>>()?;

        let fqdn = if self.status.zone.is_empty() {
            self.name
        } else {
            self.status.zone
        };

        Ok(Zone::new(self.id, fqdn, self.status.nameservers).with_records(records))
    }
}

impl ApiErrorBody {
    pub fn describe(&self) -> Option<String> {
        match (&self.error_code, &self.error_msg) {
            (Some(code), Some(msg)) => Some(format!("{}: {}", code, msg)),
            (None, Some(msg)) => Some(msg.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => self.status.clone(),
        }
    }
}
