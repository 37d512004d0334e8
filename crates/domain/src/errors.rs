use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("DNS query to {server} failed: {status}")]
    DnsQueryError { server: String, status: String },

    #[error("Record {name} is not served by the authoritative nameservers yet")]
    RecordNotPropagated { name: String },

    #[error(
        "Timed out waiting for record propagation: last error: {}",
        describe_last_error(.last_error)
    )]
    PropagationTimeout { last_error: Option<Box<DomainError>> },

    #[error("Propagation check cancelled")]
    PropagationCancelled,

    #[error("--wait isn't available for type '{0}'")]
    PropagationUnsupported(String),

    #[error("Zone {0} has no authoritative nameservers")]
    NoNameservers(String),

    #[error("Zone not found: '{0}'")]
    ZoneNotFound(String),

    #[error("Could not find zone for {0}")]
    ZoneNotFoundForRecord(String),

    #[error("Record {record} already exists in zone {zone}")]
    RecordExists { record: String, zone: String },

    #[error("Hosting API error: {0}")]
    HostingApi(String),
}

impl DomainError {
    /// Errors that will not go away by asking again.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidRecordType(_)
                | DomainError::InvalidDomainName(_)
                | DomainError::NoNameservers(_)
        )
    }

    pub fn transport(server: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        DomainError::TransportError {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn describe_last_error(last_error: &Option<Box<DomainError>>) -> String {
    match last_error {
        Some(err) => err.to_string(),
        None => "none".to_string(),
    }
}
