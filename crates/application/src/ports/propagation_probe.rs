use async_trait::async_trait;
use sakura_dns_domain::{DomainError, Record, Zone};

/// One look at the zone's authoritative nameservers.
///
/// `Ok(true)` means an authoritative answer carries the record, `Ok(false)`
/// that the answers seen so far do not. Errors are per-attempt diagnostics
/// unless [`DomainError::is_fatal`] says otherwise.
#[async_trait]
pub trait PropagationProbe: Send + Sync {
    async fn probe(&self, zone: &Zone, record: &Record) -> Result<bool, DomainError>;
}
