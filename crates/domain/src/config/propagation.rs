use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs of the propagation check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropagationConfig {
    /// Pause between two polls of the authoritative nameservers.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Per-attempt timeout of a single UDP or TCP exchange.
    #[serde(default = "default_transport_timeout_ms")]
    pub transport_timeout_ms: u64,

    /// Port used for nameserver entries that do not carry one.
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Overall budget when `--wait-timeout` is not given.
    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: u64,
}

impl PropagationConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn transport_timeout(&self) -> Duration {
        Duration::from_millis(self.transport_timeout_ms)
    }

    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            transport_timeout_ms: default_transport_timeout_ms(),
            dns_port: default_dns_port(),
            default_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_transport_timeout_ms() -> u64 {
    5000
}

fn default_dns_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    60
}
