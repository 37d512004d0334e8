mod dns_hosting;
mod propagation_probe;

pub use dns_hosting::DnsHostingPort;
pub use propagation_probe::PropagationProbe;
