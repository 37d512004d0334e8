#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_ports;

pub use mock_ports::{MockDnsHosting, ScriptedProbe};

use sakura_dns_domain::{Record, RecordType, Zone};

pub fn example_zone() -> Zone {
    Zone::new(
        "113300000001",
        "example.com",
        vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()],
    )
    .with_records(vec![
        Record::new("@", RecordType::A, "192.0.2.10", 3600),
        Record::new("www", RecordType::CNAME, "example.com.", 3600),
    ])
}

pub fn other_zone() -> Zone {
    Zone::new(
        "113300000002",
        "sub.example.com",
        vec!["ns1.example.com".to_string()],
    )
}
