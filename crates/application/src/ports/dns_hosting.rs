use async_trait::async_trait;
use sakura_dns_domain::{DomainError, Record, Zone};

/// Remote DNS hosting service holding the zones and their records.
#[async_trait]
pub trait DnsHostingPort: Send + Sync {
    /// Zones whose name partially matches `name_filter`, or every zone when `None`.
    async fn search_zones(&self, name_filter: Option<&str>) -> Result<Vec<Zone>, DomainError>;

    /// Replaces the full record set of a zone and returns the updated zone.
    async fn update_records(&self, zone_id: &str, records: &[Record]) -> Result<Zone, DomainError>;
}
