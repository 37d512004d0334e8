use super::dispatcher::DnsExchange;
use super::query_builder::ProbeQuery;
use hickory_proto::op::Message;
use sakura_dns_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NameserverResponse {
    pub nameserver: String,
    pub message: Message,
}

#[derive(Debug)]
pub enum FanoutOutcome {
    /// First response, in list order, with a non-empty answer section.
    Answered(NameserverResponse),

    /// Nobody answered. Carries the most recent reply and, when the final
    /// attempts failed after it (or nobody replied), the most recent error.
    Exhausted {
        response: Option<NameserverResponse>,
        last_error: Option<DomainError>,
    },
}

/// Asks each authoritative nameserver in turn, one at a time.
pub struct NameserverFanout {
    exchange: Arc<dyn DnsExchange>,
}

impl NameserverFanout {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    pub async fn query(&self, nameservers: &[String], query: &ProbeQuery) -> FanoutOutcome {
        let mut response = None;
        let mut last_error = None;

        for nameserver in nameservers {
            match self.exchange.exchange(nameserver, query).await {
                Ok(message) if !message.answers().is_empty() => {
                    return FanoutOutcome::Answered(NameserverResponse {
                        nameserver: nameserver.clone(),
                        message,
                    });
                }
                Ok(message) => {
                    debug!(
                        nameserver = %nameserver,
                        rcode = ?message.response_code(),
                        "Empty answer section"
                    );
                    response = Some(NameserverResponse {
                        nameserver: nameserver.clone(),
                        message,
                    });
                    last_error = None;
                }
                Err(e) => {
                    debug!(nameserver = %nameserver, error = %e, "Nameserver query failed");
                    last_error = Some(e);
                }
            }
        }

        FanoutOutcome::Exhausted {
            response,
            last_error,
        }
    }
}
