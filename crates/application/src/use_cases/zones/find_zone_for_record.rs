use crate::ports::DnsHostingPort;
use sakura_dns_domain::{DomainError, Zone};
use std::sync::Arc;

pub struct FindZoneForRecordUseCase {
    hosting: Arc<dyn DnsHostingPort>,
}

impl FindZoneForRecordUseCase {
    pub fn new(hosting: Arc<dyn DnsHostingPort>) -> Self {
        Self { hosting }
    }

    /// The most specific hosted zone that `record_name` falls into.
    pub async fn execute(&self, record_name: &str) -> Result<Zone, DomainError> {
        let zones = self.hosting.search_zones(None).await?;
        let wanted = record_name.trim_end_matches('.');

        let mut candidate = Some(wanted);
        while let Some(name) = candidate.filter(|n| !n.is_empty()) {
            if let Some(zone) = zones.iter().find(|z| z.fqdn == name) {
                return Ok(zone.clone());
            }
            candidate = name.split_once('.').map(|(_, parent)| parent);
        }

        Err(DomainError::ZoneNotFoundForRecord(record_name.to_string()))
    }
}
