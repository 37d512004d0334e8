#![allow(dead_code)]
use sakura_dns_domain::{Record, RecordType, Zone};

pub struct ZoneBuilder;

impl ZoneBuilder {
    /// `example.com` served by the given nameserver entries, in order.
    pub fn example(nameservers: &[String]) -> Zone {
        Zone::new("113300000001", "example.com", nameservers.to_vec())
    }
}

pub struct RecordBuilder;

impl RecordBuilder {
    pub fn verify_txt(value: &str) -> Record {
        Record::new("_verify", RecordType::TXT, value, 300)
    }

    pub fn apex_txt(value: &str) -> Record {
        Record::new("@", RecordType::TXT, value, 300)
    }

    pub fn www_cname(target: &str) -> Record {
        Record::new("www", RecordType::CNAME, target, 300)
    }
}
