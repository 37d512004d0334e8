#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod dns_server_mock;
mod sakura_api_mock;

pub use builders::{RecordBuilder, ZoneBuilder};
pub use dns_server_mock::{MockDnsServer, Reply};
pub use sakura_api_mock::{dns_item, MockSakuraApi, RecordedRequest, EXPECTED_AUTHORIZATION};
