use crate::ports::DnsHostingPort;
use sakura_dns_domain::{DomainError, Zone};
use std::sync::Arc;
use tracing::debug;

/// Longest name the hosting API accepts as a search filter.
const MAX_FILTER_LEN: usize = 63;

pub struct DescribeZoneUseCase {
    hosting: Arc<dyn DnsHostingPort>,
}

impl DescribeZoneUseCase {
    pub fn new(hosting: Arc<dyn DnsHostingPort>) -> Self {
        Self { hosting }
    }

    /// Zone whose name is exactly `name`.
    ///
    /// A filtered search is tried first; when it misses, every zone is listed.
    pub async fn execute(&self, name: &str) -> Result<Zone, DomainError> {
        let filter: String = name.chars().take(MAX_FILTER_LEN).collect();

        let zones = self.hosting.search_zones(Some(&filter)).await?;
        if let Some(zone) = zones.into_iter().find(|z| z.fqdn == name) {
            return Ok(zone);
        }

        debug!(zone = %name, "Zone not in filtered search, listing all zones");
        let zones = self.hosting.search_zones(None).await?;
        zones
            .into_iter()
            .find(|z| z.fqdn == name)
            .ok_or_else(|| DomainError::ZoneNotFound(name.to_string()))
    }
}
