use super::query_builder::ProbeQuery;
use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::Message;
use sakura_dns_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// Sends one query to one nameserver and returns the parsed reply.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(&self, nameserver: &str, query: &ProbeQuery) -> Result<Message, DomainError>;
}

/// UDP first, then the identical bytes over TCP if the reply is truncated.
///
/// Every failure (resolution, timeout, refusal, unparsable reply, id
/// mismatch) comes back as `TransportError`. Nothing is retried here.
pub struct TransportDispatcher {
    timeout: Duration,
    default_port: u16,
}

impl TransportDispatcher {
    pub fn new(timeout: Duration, default_port: u16) -> Self {
        Self {
            timeout,
            default_port,
        }
    }

    /// Socket address for a nameserver entry: `ip:port`, `ip`, `host:port` or `host`.
    pub async fn resolve(&self, nameserver: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = nameserver.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = nameserver.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.default_port));
        }

        let (host, port) = match nameserver.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    DomainError::transport(nameserver, format!("invalid port '{}'", port))
                })?;
                (host, port)
            }
            None => (nameserver, self.default_port),
        };
        let host = host.trim_end_matches('.');

        let mut addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, port)))
            .await
            .map_err(|_| DomainError::transport(nameserver, "address lookup timed out"))?
            .map_err(|e| DomainError::transport(nameserver, format!("address lookup failed: {}", e)))?;

        addrs
            .next()
            .ok_or_else(|| DomainError::transport(nameserver, "no addresses found"))
    }

    async fn send_over(
        &self,
        transport: &dyn DnsTransport,
        nameserver: &str,
        query: &ProbeQuery,
    ) -> Result<Message, DomainError> {
        let response = transport.send(&query.bytes, self.timeout).await?;
        parse_response(nameserver, query, &response.bytes, response.protocol_used)
    }
}

#[async_trait]
impl DnsExchange for TransportDispatcher {
    async fn exchange(&self, nameserver: &str, query: &ProbeQuery) -> Result<Message, DomainError> {
        let addr = self.resolve(nameserver).await?;

        let message = self
            .send_over(&UdpTransport::new(addr), nameserver, query)
            .await?;
        if !message.truncated() {
            return Ok(message);
        }

        debug!(server = %addr, "Response truncated (TC bit), retrying via TCP");
        self.send_over(&TcpTransport::new(addr), nameserver, query)
            .await
    }
}

fn parse_response(
    nameserver: &str,
    query: &ProbeQuery,
    bytes: &[u8],
    protocol: &str,
) -> Result<Message, DomainError> {
    let message = Message::from_vec(bytes).map_err(|e| {
        DomainError::transport(nameserver, format!("malformed {} response: {}", protocol, e))
    })?;

    if message.id() != query.id {
        warn!(
            server = %nameserver,
            expected = query.id,
            received = message.id(),
            "DNS response id mismatch"
        );
        return Err(DomainError::transport(
            nameserver,
            format!(
                "response id {} does not match query id {}",
                message.id(),
                query.id
            ),
        ));
    }

    debug!(
        server = %nameserver,
        protocol,
        rcode = ?message.response_code(),
        answers = message.answers().len(),
        truncated = message.truncated(),
        "DNS response parsed"
    );

    Ok(message)
}
