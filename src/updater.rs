//! Maintenance run over an Ansible Go role
//!
//! The steps run strictly in order and the first failure aborts the run.
//! There is no rollback: documents patched before the failure stay patched.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{RoleLayout, UpdaterConfig};
use crate::patcher::{
    PatchError, ReadmePatcher, VersionTokenPatcher, YamlFieldPatcher, patch_file,
};
use crate::version::checksum::write_checksums;
use crate::version::differ::get_missing_versions;
use crate::version::error::{RegistryError, SelectError, StoreError};
use crate::version::local::query_local_versions;
use crate::version::registry::ReleaseSource;
use crate::version::select::{eol_version, newest_first, newest_version, oldest_version};
use crate::version::types::{Release, find_release, stable_versions};

/// YAML variable holding the Go version in role files
pub const VERSION_VARIABLE: &str = "golang_version";

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Upstream releases together with the versions missing locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVersions {
    pub releases: Vec<Release>,
    pub missing: Vec<String>,
}

/// Updates the checksums and documents of one role checkout
pub struct Updater<S: ReleaseSource> {
    root: PathBuf,
    layout: RoleLayout,
    architectures: Vec<String>,
    source: S,
}

impl<S: ReleaseSource> Updater<S> {
    pub fn new(root: &Path, config: &UpdaterConfig, source: S) -> Self {
        Self {
            root: root.to_path_buf(),
            layout: config.layout.clone(),
            architectures: config.architectures.clone(),
            source,
        }
    }

    fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn local_versions(&self) -> Result<Vec<String>, StoreError> {
        query_local_versions(&self.path(&self.layout.versions_dir))
    }

    /// Fetch upstream releases and compute the versions missing locally
    pub async fn missing_versions(&self) -> Result<MissingVersions, UpdateError> {
        let releases = self.source.fetch_releases().await?;
        let upstream = stable_versions(&releases);
        let local = self.local_versions()?;
        let missing = get_missing_versions(&upstream, &local);

        Ok(MissingVersions { releases, missing })
    }

    /// Write checksum files for every missing version
    ///
    /// # Returns
    /// Paths of the checksum files written
    pub async fn add_missing_checksums(&self) -> Result<Vec<PathBuf>, UpdateError> {
        let MissingVersions { releases, missing } = self.missing_versions().await?;
        if missing.is_empty() {
            info!("No new versions found.");
        }

        let dir = self.path(&self.layout.versions_dir);
        let mut written = Vec::new();
        for version in &missing {
            if let Some(release) = find_release(&releases, version) {
                written.extend(write_checksums(
                    &dir,
                    version,
                    release,
                    &self.architectures,
                )?);
            }
        }

        Ok(written)
    }

    /// Point the README example at the newest version and list all versions
    pub fn update_readme(&self) -> Result<bool, UpdateError> {
        let patcher = ReadmePatcher::new(newest_first(&self.local_versions()?))?;
        Ok(patch_file(&self.path(&self.layout.readme), &patcher)?)
    }

    /// Pin the role default to the oldest supported version
    pub fn update_defaults(&self) -> Result<bool, UpdateError> {
        let version = oldest_version(&self.local_versions()?)?;

        let patcher = YamlFieldPatcher::new(VERSION_VARIABLE, &version);
        Ok(patch_file(&self.path(&self.layout.defaults), &patcher)?)
    }

    /// Point the default test fixture at the newest version
    pub fn update_tests(&self) -> Result<bool, UpdateError> {
        let version = newest_version(&self.local_versions()?)?;

        let patcher = VersionTokenPatcher::new(&version);
        Ok(patch_file(&self.path(&self.layout.test_fixture), &patcher)?)
    }

    /// Point the end-of-life fixture and its playbook at the EOL version
    ///
    /// # Returns
    /// Whether any of the two files was rewritten
    pub fn update_eol_tests(&self) -> Result<bool, UpdateError> {
        let version = eol_version(&self.local_versions()?)?;

        let test_changed = patch_file(
            &self.path(&self.layout.eol_test_fixture),
            &VersionTokenPatcher::new(&version),
        )?;
        let converge_changed = patch_file(
            &self.path(&self.layout.eol_converge),
            &YamlFieldPatcher::new(VERSION_VARIABLE, &version),
        )?;

        Ok(test_changed || converge_changed)
    }

    /// Run every step in order
    pub async fn run(&self) -> Result<(), UpdateError> {
        self.add_missing_checksums().await?;
        self.update_readme()?;
        self.update_defaults()?;
        self.update_tests()?;
        self.update_eol_tests()?;
        info!("Completed successfully.");
        Ok(())
    }
}
