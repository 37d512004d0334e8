use crate::ports::DnsHostingPort;
use sakura_dns_domain::{DomainError, Zone};
use std::sync::Arc;

pub struct ListZonesUseCase {
    hosting: Arc<dyn DnsHostingPort>,
}

impl ListZonesUseCase {
    pub fn new(hosting: Arc<dyn DnsHostingPort>) -> Self {
        Self { hosting }
    }

    pub async fn execute(&self) -> Result<Vec<Zone>, DomainError> {
        self.hosting.search_zones(None).await
    }
}
