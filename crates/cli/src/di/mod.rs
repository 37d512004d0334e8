use sakura_dns_application::ports::DnsHostingPort;
use sakura_dns_application::use_cases::{
    AddRecordUseCase, DeleteRecordUseCase, DescribeZoneUseCase, FindZoneForRecordUseCase,
    ListZonesUseCase, SetRecordUseCase, WaitForPropagationUseCase,
};
use sakura_dns_domain::Config;
use sakura_dns_infrastructure::dns::{AuthoritativeProbe, TransportDispatcher};
use sakura_dns_infrastructure::hosting::SakuraCloudDnsClient;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub list_zones: Arc<ListZonesUseCase>,
    pub describe_zone: Arc<DescribeZoneUseCase>,
    pub find_zone: Arc<FindZoneForRecordUseCase>,
    pub add_record: Arc<AddRecordUseCase>,
    pub set_record: Arc<SetRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let (access_token, access_token_secret) = config.credentials()?;
        let hosting: Arc<dyn DnsHostingPort> = Arc::new(SakuraCloudDnsClient::new(
            &config.api.endpoint(),
            access_token,
            access_token_secret,
            Duration::from_secs(config.api.request_timeout_secs),
        )?);

        let dispatcher = Arc::new(TransportDispatcher::new(
            config.propagation.transport_timeout(),
            config.propagation.dns_port,
        ));
        let probe = Arc::new(AuthoritativeProbe::new(dispatcher));
        let waiter = Arc::new(WaitForPropagationUseCase::new(
            probe,
            config.propagation.poll_interval(),
        ));

        Ok(Self {
            list_zones: Arc::new(ListZonesUseCase::new(hosting.clone())),
            describe_zone: Arc::new(DescribeZoneUseCase::new(hosting.clone())),
            find_zone: Arc::new(FindZoneForRecordUseCase::new(hosting.clone())),
            add_record: Arc::new(AddRecordUseCase::new(hosting.clone(), waiter.clone())),
            set_record: Arc::new(SetRecordUseCase::new(hosting.clone(), waiter)),
            delete_record: Arc::new(DeleteRecordUseCase::new(hosting)),
        })
    }
}
