//! DNS question construction for authoritative propagation checks.
//!
//! Queries are non-recursive (RD cleared) because they target the zone's own
//! nameservers, and advertise a 4096-byte EDNS(0) UDP payload so that most
//! TXT answers fit without falling back to TCP.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use sakura_dns_domain::{DomainError, Record, Zone};
use std::str::FromStr;

/// UDP payload size advertised in the OPT record.
pub const EDNS_UDP_PAYLOAD: u16 = 4096;

/// A serialized question, built fresh for every attempt.
#[derive(Debug, Clone)]
pub struct ProbeQuery {
    pub id: u16,
    pub name: Name,
    pub record_type: HickoryRecordType,
    pub bytes: Vec<u8>,
}

pub struct QueryBuilder;

impl QueryBuilder {
    /// Build the question for `record` inside `zone`.
    ///
    /// `@` asks for the zone apex, any other name is prefixed to the zone.
    /// Fails with `InvalidRecordType` when the type has no wire code.
    pub fn build(zone: &Zone, record: &Record) -> Result<ProbeQuery, DomainError> {
        let record_type = RecordTypeMapper::to_hickory(record.record_type)
            .ok_or_else(|| DomainError::InvalidRecordType(record.record_type.to_string()))?;

        let fqdn = zone.qualify(&record.name);
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", fqdn, e))
        })?;

        Self::build_for_name(name, record_type)
    }

    pub fn build_for_name(
        name: Name,
        record_type: HickoryRecordType,
    ) -> Result<ProbeQuery, DomainError> {
        let mut query = Query::new();
        query.set_name(name.clone());
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut edns = Edns::new();
        edns.set_max_payload(EDNS_UDP_PAYLOAD);
        edns.set_version(0);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message.set_id(id);
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);
        message.set_edns(edns);

        let bytes = Self::serialize_message(&message)?;
        Ok(ProbeQuery {
            id,
            name,
            record_type,
            bytes,
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
