use super::models::{ApiErrorBody, CommonServiceItemEnvelope, CommonServiceItemList, UpdateRequest};
use async_trait::async_trait;
use reqwest::{Method, Response, Url};
use sakura_dns_application::ports::DnsHostingPort;
use sakura_dns_domain::{DomainError, Record, Zone};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("sakura-dns/", env!("CARGO_PKG_VERSION"));

/// `DnsHostingPort` backed by the Sakura Cloud HTTP API.
pub struct SakuraCloudDnsClient {
    http_client: reqwest::Client,
    endpoint: Url,
    access_token: String,
    access_token_secret: String,
}

impl SakuraCloudDnsClient {
    pub fn new(
        endpoint: &str,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| DomainError::HostingApi(format!("invalid endpoint '{}': {}", endpoint, e)))?;

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| DomainError::HostingApi(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        })
    }

    fn url(&self, path: &str) -> Result<Url, DomainError> {
        self.endpoint
            .join(path)
            .map_err(|e| DomainError::HostingApi(format!("invalid resource path '{}': {}", path, e)))
    }

    /// The API reads its search conditions as JSON in the query string.
    fn search_url(&self, name_filter: Option<&str>) -> Result<Url, DomainError> {
        let mut filter = json!({ "Provider.Class": "dns" });
        if let Some(name) = name_filter {
            filter["Name"] = json!(name);
        }
        let condition = json!({ "Filter": filter });

        let mut url = self.url("commonserviceitem")?;
        url.set_query(Some(&condition.to_string()));
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .basic_auth(&self.access_token, Some(&self.access_token_secret))
            .send()
            .await
            .map_err(|e| DomainError::HostingApi(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.describe())
            .unwrap_or(body);

        Err(DomainError::HostingApi(format!(
            "HTTP {}: {}",
            status.as_u16(),
            detail
        )))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::HostingApi(format!("unexpected response body: {}", e)))
    }
}

#[async_trait]
impl DnsHostingPort for SakuraCloudDnsClient {
    async fn search_zones(&self, name_filter: Option<&str>) -> Result<Vec<Zone>, DomainError> {
        let url = self.search_url(name_filter)?;
        debug!(filter = ?name_filter, "Searching DNS zones");

        let response = self.send(self.http_client.get(url)).await?;
        let list: CommonServiceItemList = Self::decode(response).await?;

        debug!(total = list.total, returned = list.items.len(), "DNS zones listed");
        list.items.into_iter().map(|item| item.into_zone()).collect()
    }

    async fn update_records(&self, zone_id: &str, records: &[Record]) -> Result<Zone, DomainError> {
        let url = self.url(&format!("commonserviceitem/{}", zone_id))?;
        info!(zone_id = %zone_id, records = records.len(), "Updating DNS records");

        let request = self
            .http_client
            .request(Method::PUT, url)
            .json(&UpdateRequest::new(records));
        let response = self.send(request).await?;
        let envelope: CommonServiceItemEnvelope = Self::decode(response).await?;

        envelope.item.into_zone()
    }
}
