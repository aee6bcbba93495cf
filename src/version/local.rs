//! Scanner for the checksum files already present in the role

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error};

use crate::version::error::StoreError;
use crate::version::semver::sort_versions;

/// Leading `major.minor[.patch]` of a checksum file name
static FILE_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+(?:\.\d+)?)").unwrap());

/// Extract the version a checksum file name starts with
pub fn version_from_file_name(file_name: &str) -> Option<&str> {
    FILE_VERSION_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// List the versions that have at least one checksum file in `dir`
///
/// # Returns
/// * `Ok(Vec<String>)` - Unique versions in ascending semantic order
/// * `Err(StoreError::DirectoryNotFound)` - If `dir` is not a directory
pub fn query_local_versions(dir: &Path) -> Result<Vec<String>, StoreError> {
    if !dir.is_dir() {
        error!("Directory {} does not exist", dir.display());
        return Err(StoreError::DirectoryNotFound(dir.to_path_buf()));
    }

    let io_error = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut versions = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        match version_from_file_name(name) {
            Some(version) => versions.push(version.to_string()),
            None => debug!("Skipping {}: no leading version", name),
        }
    }

    Ok(sort_versions(versions))
}
