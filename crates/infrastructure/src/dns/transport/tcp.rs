//! TCP Transport for DNS queries (RFC 1035 §4.2.2, RFC 7766)
//!
//! Each message is preceded by a 2-byte big-endian length. One connection is
//! opened per query and closed afterwards.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use sakura_dns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            DomainError::transport(self.server_addr, format!("TCP connect failed: {}", e))
        })?;

        stream.set_nodelay(true).map_err(|e| {
            DomainError::transport(self.server_addr, format!("failed to set TCP_NODELAY: {}", e))
        })?;

        send_with_length_prefix(&mut stream, message_bytes)
            .await
            .map_err(|e| {
                DomainError::transport(self.server_addr, format!("failed to send TCP query: {}", e))
            })?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response = read_with_length_prefix(&mut stream).await.map_err(|e| {
            DomainError::transport(
                self.server_addr,
                format!("failed to read TCP response: {}", e),
            )
        })?;

        debug!(
            server = %self.server_addr,
            response_len = response.len(),
            "TCP response received"
        );

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
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
                    format!("TCP query timed out after {}ms", timeout.as_millis()),
                )
            })??;

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message too large: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    if response_len == 0 || response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid response length: {}", response_len),
        ));
    }

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await?;
    Ok(response)
}
