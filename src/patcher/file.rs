//! Applying patchers to files on disk

use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use crate::patcher::traits::{PatchError, Patcher};

/// Patch a file in place
///
/// The file is only written when the patched content differs, so unchanged
/// documents keep their modification time.
///
/// # Returns
/// * `Ok(true)` - The file was rewritten
/// * `Ok(false)` - The file already had the expected content
pub fn patch_file(path: &Path, patcher: &dyn Patcher) -> Result<bool, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| {
        error!("Error reading {}: {}", path.display(), source);
        PatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let patched = patcher.patch(&content)?;
    if patched == content {
        debug!("Unchanged: {}", path.display());
        return Ok(false);
    }

    info!("Writing: {}", path.display());
    fs::write(path, patched).map_err(|source| {
        error!("Error writing {}: {}", path.display(), source);
        PatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(true)
}
