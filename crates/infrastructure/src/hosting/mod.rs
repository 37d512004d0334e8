pub mod models;
pub mod sakura_cloud;

pub use sakura_cloud::SakuraCloudDnsClient;
