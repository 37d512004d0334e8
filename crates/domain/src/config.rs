pub mod api;
pub mod errors;
pub mod logging;
pub mod propagation;
pub mod root;

pub use api::ApiConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use propagation::PropagationConfig;
pub use root::{CliOverrides, Config};
