use super::{ensure_waitable, wait_if_requested, RecordChange, WaitOptions};
use crate::ports::DnsHostingPort;
use crate::use_cases::{DescribeZoneUseCase, WaitForPropagationUseCase};
use sakura_dns_domain::{DomainError, Zone};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct AddRecordUseCase {
    hosting: Arc<dyn DnsHostingPort>,
    describe_zone: DescribeZoneUseCase,
    waiter: Arc<WaitForPropagationUseCase>,
}

impl AddRecordUseCase {
    pub fn new(hosting: Arc<dyn DnsHostingPort>, waiter: Arc<WaitForPropagationUseCase>) -> Self {
        Self {
            describe_zone: DescribeZoneUseCase::new(Arc::clone(&hosting)),
            hosting,
            waiter,
        }
    }

    /// Adds one record, refusing an identical name/type/data triple.
    pub async fn execute(
        &self,
        change: &RecordChange,
        wait: Option<WaitOptions>,
        cancel: &CancellationToken,
    ) -> Result<Zone, DomainError> {
        ensure_waitable(change.record_type, wait)?;

        let zone = self.describe_zone.execute(&change.zone).await?;
        let record = change.to_record()?;
        let records = zone.records_with_added(record.clone())?;

        info!(zone = %zone.fqdn, record = %record, "Adding record");
        let updated = self.hosting.update_records(&zone.id, &records).await?;

        wait_if_requested(&self.waiter, &updated, &record, wait, cancel).await?;
        Ok(updated)
    }
}
