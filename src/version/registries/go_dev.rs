//! go.dev downloads API implementation

use std::time::Duration;

use tracing::{error, warn};

use crate::version::error::RegistryError;
use crate::version::registry::ReleaseSource;
use crate::version::types::Release;

/// Default endpoint listing stable and unstable releases
///
/// See https://pkg.go.dev/golang.org/x/website/internal/dl
pub const DEFAULT_DOWNLOAD_URL: &str = "https://go.dev/dl/?mode=json&include=all";

/// Release source backed by the go.dev downloads API
pub struct GoDevRegistry {
    client: reqwest::Client,
    url: String,
}

impl GoDevRegistry {
    /// Creates a registry for `url` with a request timeout
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("golang-role-updater/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GoDevRegistry {
    async fn fetch_releases(&self) -> Result<Vec<Release>, RegistryError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Failed to fetch Go releases from {}: {}", self.url, e);
            RegistryError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Go downloads API returned status {}: {}", status, self.url);
            return Err(RegistryError::UnexpectedStatus {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read Go releases from {}: {}", self.url, e);
            RegistryError::Network(e)
        })?;

        let releases: Vec<Release> = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode Go downloads response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        if releases.is_empty() {
            return Err(RegistryError::EmptyResult);
        }

        Ok(releases)
    }
}
