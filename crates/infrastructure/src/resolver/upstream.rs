use async_trait::async_trait;
use hickory_proto::rr::RecordType;
use plmnscope_application::ports::HostResolver;
use plmnscope_domain::{normalize_addresses, AddressSet, DomainError};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use super::udp::UdpExchange;
use super::wire::{build_query, parse_answer, AddressAnswer};

/// Queries A and AAAA directly against a list of upstream servers.
///
/// Servers are tried in order. A server that times out or answers with
/// SERVFAIL/REFUSED passes the question to the next one; NXDOMAIN or an
/// empty NOERROR answer ends the lookup. Each attempt gets an equal share of
/// the time left, so a silent server cannot starve the ones after it.
pub struct UpstreamHostResolver {
    servers: Vec<UdpExchange>,
}

impl UpstreamHostResolver {
    pub fn new(servers: Vec<SocketAddr>) -> Self {
        Self {
            servers: servers.into_iter().map(UdpExchange::new).collect(),
        }
    }

    async fn query_server(
        server: &UdpExchange,
        hostname: &str,
        deadline: Instant,
    ) -> Result<(bool, Vec<IpAddr>), DomainError> {
        let (v4, v6) = tokio::join!(
            Self::query_type(server, hostname, RecordType::A, deadline),
            Self::query_type(server, hostname, RecordType::AAAA, deadline),
        );

        let mut addresses = Vec::new();
        let mut definitive = false;
        let mut last_error = None;

        for answer in [v4, v6] {
            match answer {
                Ok(answer) => {
                    definitive |= answer.is_definitive();
                    addresses.extend(answer.addresses);
                }
                Err(e) => last_error = Some(e),
            }
        }

        if addresses.is_empty() && !definitive {
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        Ok((definitive, addresses))
    }

    async fn query_type(
        server: &UdpExchange,
        hostname: &str,
        record_type: RecordType,
        deadline: Instant,
    ) -> Result<AddressAnswer, DomainError> {
        let (id, query) = build_query(hostname, record_type)?;
        let response = server.exchange(id, &query, deadline).await?;
        parse_answer(&response)
    }
}

#[async_trait]
impl HostResolver for UpstreamHostResolver {
    async fn resolve(&self, hostname: &str, timeout: Duration) -> AddressSet {
        let deadline = Instant::now() + timeout;
        let total = self.servers.len();

        for (index, server) in self.servers.iter().enumerate() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let attempt_deadline = now + (deadline - now) / (total - index) as u32;

            match Self::query_server(server, hostname, attempt_deadline).await {
                Ok((_, addresses)) if !addresses.is_empty() => {
                    return normalize_addresses(addresses);
                }
                Ok((true, _)) => {
                    debug!(hostname = %hostname, server = %server.server_addr(), "No addresses");
                    return AddressSet::new();
                }
                Ok((false, _)) => {
                    debug!(hostname = %hostname, server = %server.server_addr(), "Server failure, trying next");
                }
                Err(e) => {
                    debug!(hostname = %hostname, server = %server.server_addr(), error = %e, "Upstream query failed");
                }
            }
        }

        AddressSet::new()
    }

    fn name(&self) -> &'static str {
        "upstream"
    }
}
