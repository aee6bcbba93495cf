//! Release source test utilities

use async_trait::async_trait;

use golang_role_updater::version::error::RegistryError;
use golang_role_updater::version::registry::ReleaseSource;
use golang_role_updater::version::types::{Release, ReleaseFile};

/// Release source serving a fixed list
pub struct StaticReleaseSource {
    releases: Vec<Release>,
}

impl StaticReleaseSource {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }
}

#[async_trait]
impl ReleaseSource for StaticReleaseSource {
    async fn fetch_releases(&self) -> Result<Vec<Release>, RegistryError> {
        if self.releases.is_empty() {
            return Err(RegistryError::EmptyResult);
        }
        Ok(self.releases.clone())
    }
}

/// Stable release with Linux archives for amd64, armv6l and arm64 plus a
/// darwin archive that must be ignored
#[allow(dead_code)]
pub fn linux_release(version: &str) -> Release {
    let file = |os: &str, arch: &str| ReleaseFile {
        os: os.to_string(),
        arch: arch.to_string(),
        kind: "archive".to_string(),
        sha256: format!("sha-{version}-{os}-{arch}"),
    };

    Release {
        version: format!("go{version}"),
        stable: true,
        files: vec![
            file("linux", "amd64"),
            file("linux", "armv6l"),
            file("linux", "arm64"),
            file("darwin", "amd64"),
        ],
    }
}
