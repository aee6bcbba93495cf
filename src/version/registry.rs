//! Source trait for fetching the upstream release list

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::Release;

/// Trait for fetching every published Go release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches all releases, stable and unstable
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - Non-empty list of release records
    /// * `Err(RegistryError)` - If the request fails or yields no releases
    async fn fetch_releases(&self) -> Result<Vec<Release>, RegistryError>;
}
