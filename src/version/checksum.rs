//! Checksum files for the release archives installed by the role

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::version::error::StoreError;
use crate::version::types::Release;

/// Architectures the role installs by default
pub const DEFAULT_ARCHITECTURES: [&str; 3] = ["amd64", "armv6l", "arm64"];

const TARGET_OS: &str = "linux";
const TARGET_KIND: &str = "archive";

/// Path of the checksum file for a version and architecture
pub fn checksum_path(dir: &Path, version: &str, arch: &str) -> PathBuf {
    dir.join(format!("{version}-{arch}.yml"))
}

/// Contents of a checksum file
pub fn checksum_contents(checksum: &str) -> String {
    format!(
        "---\n\
         # SHA256 sum for the redistributable package\n\
         golang_redis_sha256sum: '{checksum}'\n"
    )
}

/// Write the checksum file for one version and architecture
pub fn write_checksum(
    dir: &Path,
    version: &str,
    arch: &str,
    checksum: &str,
) -> Result<PathBuf, StoreError> {
    let path = checksum_path(dir, version, arch);
    info!("Writing: {}", path.display());

    fs::write(&path, checksum_contents(checksum)).map_err(|source| {
        error!("Error writing checksum file {}: {}", path.display(), source);
        StoreError::Io {
            path: path.clone(),
            source,
        }
    })?;

    Ok(path)
}

/// Write checksum files for the Linux archives of a release
///
/// # Arguments
/// * `dir` - Directory holding the checksum files
/// * `version` - Bare version (`1.21.0`)
/// * `release` - Upstream record for that version
/// * `architectures` - Architectures to keep
///
/// # Returns
/// Paths of the files written, in release file order
pub fn write_checksums(
    dir: &Path,
    version: &str,
    release: &Release,
    architectures: &[String],
) -> Result<Vec<PathBuf>, StoreError> {
    let mut written = Vec::new();

    for file in &release.files {
        if file.os != TARGET_OS
            || file.kind != TARGET_KIND
            || !architectures.iter().any(|arch| *arch == file.arch)
        {
            continue;
        }

        if file.sha256.is_empty() {
            warn!(
                "Skipping {} {}: release has no checksum",
                release.version, file.arch
            );
            continue;
        }

        written.push(write_checksum(dir, version, &file.arch, &file.sha256)?);
    }

    Ok(written)
}
