use plmnscope_domain::DomainError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::wire::message_id;

/// Largest response accepted over UDP with EDNS(0).
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// One query/response exchange with a single upstream over UDP.
pub struct UdpExchange {
    server_addr: SocketAddr,
}

impl UdpExchange {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Sends `query` and waits until `deadline` for a response carrying
    /// `expected_id` from the server. Datagrams with another ID or from
    /// another source are dropped and the wait continues.
    pub async fn exchange(
        &self,
        expected_id: u16,
        query: &[u8],
        deadline: Instant,
    ) -> Result<Vec<u8>, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        tokio::time::timeout_at(deadline, socket.send_to(query, self.server_addr))
            .await
            .map_err(|_| self.timeout_error("sending"))?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (len, from_addr) = tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error("waiting for"))?
                .map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            let datagram = &recv_buf[..len];
            if message_id(datagram) != Some(expected_id) {
                debug!(
                    server = %self.server_addr,
                    expected_id,
                    "Discarding response with mismatched ID"
                );
                continue;
            }

            return Ok(datagram.to_vec());
        }
    }

    fn timeout_error(&self, phase: &str) -> DomainError {
        DomainError::IoError(format!(
            "Timeout {} UDP response from {}",
            phase, self.server_addr
        ))
    }
}
