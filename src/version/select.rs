//! Selection of the versions the role documents reference

use crate::version::error::SelectError;
use crate::version::semver::{filter_by_minor_version, get_minor_versions};

fn require(what: &'static str, needed: usize, found: usize) -> Result<(), SelectError> {
    if found < needed {
        return Err(SelectError::InsufficientData {
            what,
            needed,
            found,
        });
    }
    Ok(())
}

/// Newest version of an ascending list
pub fn newest_version(versions: &[String]) -> Result<String, SelectError> {
    require("local versions", 1, versions.len())?;
    Ok(versions[versions.len() - 1].clone())
}

/// Oldest version of an ascending list
pub fn oldest_version(versions: &[String]) -> Result<String, SelectError> {
    require("local versions", 1, versions.len())?;
    Ok(versions[0].clone())
}

/// Ascending list reversed, newest first
pub fn newest_first(versions: &[String]) -> Vec<String> {
    versions.iter().rev().cloned().collect()
}

/// Newest patch release of the second-newest minor line
///
/// This is the line about to go out of support.
pub fn eol_version(versions: &[String]) -> Result<String, SelectError> {
    require("local versions", 2, versions.len())?;

    let minors = get_minor_versions(versions);
    require("minor versions", 2, minors.len())?;

    let eol_minor = &minors[minors.len() - 2];
    newest_version(&filter_by_minor_version(eol_minor, versions))
}
