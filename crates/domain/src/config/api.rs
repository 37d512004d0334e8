use serde::{Deserialize, Serialize};

pub const ENV_ACCESS_TOKEN: &str = "SAKURACLOUD_ACCESS_TOKEN";
pub const ENV_ACCESS_TOKEN_SECRET: &str = "SAKURACLOUD_ACCESS_TOKEN_SECRET";
pub const ENV_ZONE: &str = "SAKURACLOUD_ZONE";
pub const ENV_ROOT_URL: &str = "SAKURACLOUD_API_ROOT_URL";

/// Hosting API connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// API zone used to reach global resources such as DNS.
    #[serde(default = "default_zone")]
    pub zone: String,

    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing)]
    pub access_token_secret: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/api/cloud/1.1/",
            self.root_url.trim_end_matches('/'),
            self.zone
        )
    }

    /// Fills unset fields from the environment, looked up through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.access_token.is_none() {
            self.access_token = lookup(ENV_ACCESS_TOKEN);
        }
        if self.access_token_secret.is_none() {
            self.access_token_secret = lookup(ENV_ACCESS_TOKEN_SECRET);
        }
        if let Some(zone) = lookup(ENV_ZONE) {
            self.zone = zone;
        }
        if let Some(root_url) = lookup(ENV_ROOT_URL) {
            self.root_url = root_url;
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            zone: default_zone(),
            access_token: None,
            access_token_secret: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_root_url() -> String {
    "https://secure.sakura.ad.jp/cloud/zone".to_string()
}

fn default_zone() -> String {
    "is1a".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
