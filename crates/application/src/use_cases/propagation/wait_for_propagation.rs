use crate::ports::PropagationProbe;
use sakura_dns_domain::{DomainError, Record, Zone};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Deadline used when `now + timeout` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Owned by a single `execute` call.
struct PollState {
    deadline: Instant,
    last_error: Option<DomainError>,
    ticks: u32,
}

impl PollState {
    fn new(timeout: Duration) -> Self {
        let now = Instant::now();
        Self {
            deadline: now.checked_add(timeout).unwrap_or(now + FAR_FUTURE),
            last_error: None,
            ticks: 0,
        }
    }

    fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    fn into_timeout(self) -> DomainError {
        DomainError::PropagationTimeout {
            last_error: self.last_error.map(Box::new),
        }
    }
}

/// Polls the zone's authoritative nameservers until they serve `record`.
///
/// Terminates on the first match, on a fatal error, on cancellation, or
/// once the caller's timeout elapses. Ticks never overlap; between ticks
/// the task sleeps for the configured interval, cut short by the deadline.
pub struct WaitForPropagationUseCase {
    probe: Arc<dyn PropagationProbe>,
    interval: Duration,
}

impl WaitForPropagationUseCase {
    pub fn new(probe: Arc<dyn PropagationProbe>, interval: Duration) -> Self {
        Self { probe, interval }
    }

    pub async fn execute(
        &self,
        zone: &Zone,
        record: &Record,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<(), DomainError> {
        if zone.nameservers.is_empty() {
            return Err(DomainError::NoNameservers(zone.fqdn.clone()));
        }

        let mut state = PollState::new(timeout);
        info!(
            zone = %zone.fqdn,
            name = %record.name,
            record_type = %record.record_type,
            timeout_ms = timeout.as_millis() as u64,
            "Checking DNS record propagation"
        );

        loop {
            if cancel.is_cancelled() {
                return Err(DomainError::PropagationCancelled);
            }
            if state.expired() {
                info!(ticks = state.ticks, "Propagation check timed out");
                return Err(state.into_timeout());
            }

            state.ticks += 1;
            match self.probe.probe(zone, record).await {
                Ok(true) => {
                    info!(ticks = state.ticks, "DNS record propagated");
                    return Ok(());
                }
                Ok(false) => {
                    debug!(tick = state.ticks, "Record not served yet");
                    state.last_error = Some(DomainError::RecordNotPropagated {
                        name: zone.qualify(&record.name),
                    });
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    debug!(tick = state.ticks, error = %e, "Propagation probe failed");
                    state.last_error = Some(e);
                }
            }

            let pause = self.interval.min(state.remaining());
            info!("Waiting for DNS record propagation");
            tokio::select! {
                _ = cancel.cancelled() => return Err(DomainError::PropagationCancelled),
                _ = tokio::time::sleep(pause) => {}
            }
        }
    }
}
