use super::fanout::NameserverResponse;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{RData, Record as HickoryRecord};
use sakura_dns_domain::{DomainError, Record, RecordType};

/// Type-specific comparison of answer data against an expected record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMatcher {
    /// All character-strings of one TXT record, concatenated, byte for byte.
    Txt,
    /// CNAME target in presentation form.
    Cname,
}

impl AnswerMatcher {
    pub fn for_record_type(record_type: RecordType) -> Option<Self> {
        match record_type {
            RecordType::TXT => Some(Self::Txt),
            RecordType::CNAME => Some(Self::Cname),
            _ => None,
        }
    }

    pub fn matches(&self, answers: &[HickoryRecord], expected: &str) -> bool {
        answers.iter().any(|answer| match (self, answer.data()) {
            (Self::Txt, RData::TXT(txt)) => {
                let joined: Vec<u8> = txt
                    .txt_data()
                    .iter()
                    .flat_map(|segment| segment.iter().copied())
                    .collect();
                joined == expected.as_bytes()
            }
            (Self::Cname, RData::CNAME(cname)) => cname.0.to_ascii() == expected,
            _ => false,
        })
    }

    /// Whether `response` already serves `record`.
    ///
    /// A non-NOERROR status is a `DnsQueryError`. Record types without a
    /// matcher never match.
    pub fn evaluate(response: &NameserverResponse, record: &Record) -> Result<bool, DomainError> {
        let rcode = response.message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(DomainError::DnsQueryError {
                server: response.nameserver.clone(),
                status: rcode_to_status(rcode),
            });
        }

        Ok(Self::for_record_type(record.record_type)
            .is_some_and(|matcher| matcher.matches(response.message.answers(), &record.data)))
    }
}

pub fn rcode_to_status(rcode: ResponseCode) -> String {
    let status = match rcode {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::FormErr => "FORMERR",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::YXDomain => "YXDOMAIN",
        ResponseCode::YXRRSet => "YXRRSET",
        ResponseCode::NXRRSet => "NXRRSET",
        ResponseCode::NotAuth => "NOTAUTH",
        ResponseCode::NotZone => "NOTZONE",
        other => return format!("RCODE{}", u16::from(other)),
    };
    status.to_string()
}
