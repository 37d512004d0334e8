//! Mapping between `sakura_dns_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use sakura_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Wire type for a hosted record type.
    ///
    /// Returns `None` for hosting pseudo types (`ALIAS`) that are never
    /// served under their own type code.
    pub fn to_hickory(record_type: RecordType) -> Option<HickoryRecordType> {
        let mapped = match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
            RecordType::SVCB => HickoryRecordType::SVCB,
            RecordType::ALIAS => return None,
        };
        Some(mapped)
    }
}
