//! A/AAAA query encoding and answer decoding with `hickory-proto`.

use plmnscope_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::str::FromStr;

/// Smallest valid DNS message: the fixed 12-byte header.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct AddressAnswer {
    pub rcode: ResponseCode,
    pub addresses: Vec<IpAddr>,
}

impl AddressAnswer {
    /// NXDOMAIN and NOERROR are definitive; asking the next server won't help.
    pub fn is_definitive(&self) -> bool {
        matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

/// Builds a recursive query for `hostname` and returns its random ID with
/// the wire bytes.
pub fn build_query(hostname: &str, record_type: RecordType) -> Result<(u16, Vec<u8>), DomainError> {
    let name = Name::from_str(hostname).map_err(|e| {
        DomainError::InvalidDomainName(format!("Invalid hostname '{}': {}", hostname, e))
    })?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let id = fastrand::u16(..);
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok((id, buf))
}

/// Reads the transaction ID from the header without a full parse.
pub fn message_id(bytes: &[u8]) -> Option<u16> {
    if bytes.len() < HEADER_LEN {
        return None;
    }
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Collects every A and AAAA record in the answer section. CNAME chains are
/// flattened by the upstream, so only address records matter here.
pub fn parse_answer(bytes: &[u8]) -> Result<AddressAnswer, DomainError> {
    let message = Message::from_vec(bytes).map_err(|e| {
        DomainError::InvalidDomainName(format!("Failed to parse DNS response: {}", e))
    })?;

    let addresses = message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
            _ => None,
        })
        .collect();

    Ok(AddressAnswer {
        rcode: message.response_code(),
        addresses,
    })
}
