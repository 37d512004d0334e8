pub mod dispatcher;
pub mod fanout;
pub mod matcher;
pub mod probe;
pub mod query_builder;
pub mod record_type_map;
pub mod transport;

pub use dispatcher::{DnsExchange, TransportDispatcher};
pub use fanout::{FanoutOutcome, NameserverFanout, NameserverResponse};
pub use matcher::AnswerMatcher;
pub use probe::AuthoritativeProbe;
pub use query_builder::{ProbeQuery, QueryBuilder};
pub use record_type_map::RecordTypeMapper;
