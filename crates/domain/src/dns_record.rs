mod record;
mod record_type;

pub use record::{relative_name, Record};
pub use record_type::RecordType;
