pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use sakura_dns_domain::DomainError;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response round-trip to a single server.
///
/// Implementations open a fresh socket per call and never retry.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}
