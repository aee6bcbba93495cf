//! Comparison of upstream and local versions

use std::collections::HashSet;

use crate::version::semver::{filter_by_minor_version, get_minor_versions, sort_versions};

/// Number of newest minor lines considered on each side
pub const ACTIVE_MINOR_LINES: usize = 2;

/// The newest `count` minor lines of `versions`, ascending
fn recent_minor_versions(versions: &[String], count: usize) -> Vec<String> {
    let minors = get_minor_versions(versions);
    let skip = minors.len().saturating_sub(count);
    minors.into_iter().skip(skip).collect()
}

/// Identify upstream versions that have no local checksum yet
///
/// Only the two newest minor lines upstream and the two newest minor lines
/// locally are compared. Older lines are ignored even when they have gaps.
pub fn get_missing_versions(upstream: &[String], local: &[String]) -> Vec<String> {
    let mut active = recent_minor_versions(upstream, ACTIVE_MINOR_LINES);
    active.extend(recent_minor_versions(local, ACTIVE_MINOR_LINES));
    let active = sort_versions(active);

    let missing = active.iter().flat_map(|minor| {
        let known: HashSet<String> = filter_by_minor_version(minor, local).into_iter().collect();
        filter_by_minor_version(minor, upstream)
            .into_iter()
            .filter(move |version| !known.contains(version))
    });

    sort_versions(missing)
}
