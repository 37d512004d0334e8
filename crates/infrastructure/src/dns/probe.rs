use super::dispatcher::DnsExchange;
use super::fanout::{FanoutOutcome, NameserverFanout};
use super::matcher::AnswerMatcher;
use super::query_builder::QueryBuilder;
use async_trait::async_trait;
use sakura_dns_application::ports::PropagationProbe;
use sakura_dns_domain::{DomainError, Record, Zone};
use std::sync::Arc;
use tracing::debug;

/// One propagation check against the zone's authoritative nameservers.
///
/// Builds a fresh query, fans it out in nameserver order and matches the
/// first non-empty answer. When nobody answers, the last attempt decides:
/// a transport error that followed every reply wins, otherwise the last
/// reply is evaluated (its status may be an error).
pub struct AuthoritativeProbe {
    fanout: NameserverFanout,
}

impl AuthoritativeProbe {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self {
            fanout: NameserverFanout::new(exchange),
        }
    }
}

#[async_trait]
impl PropagationProbe for AuthoritativeProbe {
    async fn probe(&self, zone: &Zone, record: &Record) -> Result<bool, DomainError> {
        let query = QueryBuilder::build(zone, record)?;
        debug!(
            id = query.id,
            name = %query.name,
            record_type = %query.record_type,
            nameservers = zone.nameservers.len(),
            "Querying authoritative nameservers"
        );

        match self.fanout.query(&zone.nameservers, &query).await {
            FanoutOutcome::Answered(response) => AnswerMatcher::evaluate(&response, record),
            FanoutOutcome::Exhausted {
                response,
                last_error: Some(e),
            } => {
                if let Some(response) = response {
                    debug!(
                        nameserver = %response.nameserver,
                        error = %e,
                        "Reporting the failure that followed an empty reply"
                    );
                }
                Err(e)
            }
            FanoutOutcome::Exhausted {
                response: Some(response),
                last_error: None,
            } => AnswerMatcher::evaluate(&response, record),
            FanoutOutcome::Exhausted {
                response: None,
                last_error: None,
            } => Ok(false),
        }
    }
}
