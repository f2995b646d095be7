#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Answer {
        v4: Vec<Ipv4Addr>,
        v6: Vec<Ipv6Addr>,
    },
    NxDomain,
    ServFail,
    Silent,
    /// Sends a reply with a wrong transaction ID before the real answer.
    WrongIdFirst { v4: Vec<Ipv4Addr> },
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicU64>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            for response in Self::build_responses(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_responses(query: &[u8], behavior: &MockBehavior) -> Vec<Vec<u8>> {
        let Some(qtype) = Self::query_type(query) else {
            return vec![];
        };

        match behavior {
            MockBehavior::Silent => vec![],
            MockBehavior::NxDomain => vec![Self::header_only(query, 0x83)],
            MockBehavior::ServFail => vec![Self::header_only(query, 0x82)],
            MockBehavior::Answer { v4, v6 } => {
                vec![Self::answer(query, qtype, v4, v6)]
            }
            MockBehavior::WrongIdFirst { v4 } => {
                let real = Self::answer(query, qtype, v4, &[]);
                let mut decoy = real.clone();
                decoy[0] ^= 0xff;
                decoy[1] ^= 0xff;
                vec![decoy, real]
            }
        }
    }

    fn query_type(query: &[u8]) -> Option<u16> {
        if query.len() < 12 {
            return None;
        }
        let mut pos = 12;
        while pos < query.len() && query[pos] != 0 {
            pos += query[pos] as usize + 1;
        }
        let qtype = query.get(pos + 1..pos + 3)?;
        Some(u16::from_be_bytes([qtype[0], qtype[1]]))
    }

    fn header_only(query: &[u8], rcode_flags: u8) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.push(0x81);
        response.push(rcode_flags);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);
        response
    }

    fn answer(query: &[u8], qtype: u16, v4: &[Ipv4Addr], v6: &[Ipv6Addr]) -> Vec<u8> {
        let records: Vec<Vec<u8>> = match qtype {
            TYPE_A => v4.iter().map(|ip| ip.octets().to_vec()).collect(),
            TYPE_AAAA => v6.iter().map(|ip| ip.octets().to_vec()).collect(),
            _ => vec![],
        };

        let mut response = Self::header_only(query, 0x80);
        let count = records.len() as u16;
        response[6..8].copy_from_slice(&count.to_be_bytes());

        for rdata in records {
            response.extend_from_slice(&[0xc0, 0x0c]);
            response.extend_from_slice(&qtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
