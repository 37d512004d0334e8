//! Sakura DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod zone;

pub use config::{ApiConfig, CliOverrides, Config, ConfigError, LoggingConfig, PropagationConfig};
pub use dns_record::{relative_name, Record, RecordType};
pub use errors::DomainError;
pub use zone::Zone;
