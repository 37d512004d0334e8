pub mod add_record;
pub mod delete_record;
pub mod set_record;

pub use add_record::AddRecordUseCase;
pub use delete_record::DeleteRecordUseCase;
pub use set_record::SetRecordUseCase;

use super::propagation::WaitForPropagationUseCase;
use sakura_dns_domain::{relative_name, DomainError, Record, RecordType, Zone};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// A record mutation as requested by the user.
#[derive(Debug, Clone)]
pub struct RecordChange {
    /// Zone name, e.g. `example.com`.
    pub zone: String,
    /// Relative name, `@`, or a fully-qualified name with a trailing dot.
    pub name: String,
    pub record_type: RecordType,
    pub data: String,
    pub ttl: u32,
}

impl RecordChange {
    /// The record as stored by the hosting service, name made relative.
    pub fn to_record(&self) -> Result<Record, DomainError> {
        let record = Record::new(
            relative_name(&self.name, &self.zone),
            self.record_type,
            self.data.clone(),
            self.ttl,
        );
        record.validate()?;
        Ok(record)
    }
}

/// Ask for the mutation to be confirmed on the authoritative nameservers.
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub timeout: Duration,
}

fn ensure_waitable(record_type: RecordType, wait: Option<WaitOptions>) -> Result<(), DomainError> {
    if wait.is_some() && !record_type.supports_propagation_check() {
        return Err(DomainError::PropagationUnsupported(record_type.to_string()));
    }
    Ok(())
}

async fn wait_if_requested(
    waiter: &WaitForPropagationUseCase,
    zone: &Zone,
    record: &Record,
    wait: Option<WaitOptions>,
    cancel: &CancellationToken,
) -> Result<(), DomainError> {
    let Some(wait) = wait else {
        return Ok(());
    };
    waiter.execute(zone, record, wait.timeout, cancel).await?;
    info!(zone = %zone.fqdn, record = %record, "Record confirmed on authoritative nameservers");
    Ok(())
}
