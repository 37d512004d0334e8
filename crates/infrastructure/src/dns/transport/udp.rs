//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Responses may be up to the EDNS(0)
//! payload advertised by the query. A response with the TC bit set is
//! returned unchanged; switching to TCP is the dispatcher's decision.

use super::{DnsTransport, TransportResponse};
use crate::dns::query_builder::EDNS_UDP_PAYLOAD;
use async_trait::async_trait;
use sakura_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to bind UDP socket: {}", e))
        })?;

        // Connected socket: datagrams from other sources are dropped by the kernel
        socket.connect(self.server_addr).await.map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to connect UDP socket: {}", e))
        })?;

        let bytes_sent = socket.send(message_bytes).await.map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to send UDP query: {}", e))
        })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; EDNS_UDP_PAYLOAD as usize];
        let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
            DomainError::transport(
                self.server_addr,
                format!("failed to receive UDP response: {}", e),
            )
        })?;
        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");
        Ok(recv_buf)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| {
                DomainError::transport(
                    self.server_addr,
                    format!("UDP query timed out after {}ms", timeout.as_millis()),
                )
            })??;

        Ok(TransportResponse {
            bytes,
            protocol_used: "UDP",
        })
    }
}
