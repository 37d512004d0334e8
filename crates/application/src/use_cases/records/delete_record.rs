use super::RecordChange;
use crate::ports::DnsHostingPort;
use crate::use_cases::DescribeZoneUseCase;
use sakura_dns_domain::{DomainError, Zone};
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeleteRecordUseCase {
    hosting: Arc<dyn DnsHostingPort>,
    describe_zone: DescribeZoneUseCase,
}

impl DeleteRecordUseCase {
    pub fn new(hosting: Arc<dyn DnsHostingPort>) -> Self {
        Self {
            describe_zone: DescribeZoneUseCase::new(Arc::clone(&hosting)),
            hosting,
        }
    }

    /// Removes records matching the change's name, type and data. The TTL is ignored.
    pub async fn execute(&self, change: &RecordChange) -> Result<Zone, DomainError> {
        let zone = self.describe_zone.execute(&change.zone).await?;
        let record = change.to_record()?;
        let (records, removed) = zone.records_without(&record);

        if removed == 0 {
            warn!(zone = %zone.fqdn, record = %record, "No matching record to delete");
        } else {
            info!(zone = %zone.fqdn, record = %record, removed, "Deleting record");
        }

        self.hosting.update_records(&zone.id, &records).await
    }
}
