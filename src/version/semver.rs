use std::cmp::Ordering;
use std::collections::HashSet;

use semver::Version;
use tracing::warn;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.21" by padding with zeros.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.21" -> Version(1, 21, 0)
/// - "1.21.3" -> Version(1, 21, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Compare two version strings semantically.
///
/// `1.20` and `1.20.0` are semantically equal; the raw text breaks the tie so
/// that the ordering stays total. Unparseable strings sort before any version.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(left), Some(right)) => left.cmp(&right).then_with(|| a.cmp(b)),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// De-duplicate and sort versions in ascending semantic order.
///
/// Strings that are not versions are dropped.
pub fn sort_versions<I>(versions: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = versions
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|v| {
            let valid = parse_version(v).is_some();
            if !valid {
                warn!("Ignoring invalid version '{}'", v);
            }
            valid
        })
        .collect();
    unique.sort_by(|a, b| compare_versions(a, b));
    unique
}

/// Project a version onto its minor line (`1.21.3` -> `1.21`)
pub fn minor_version(version: &str) -> Option<String> {
    let parsed = parse_version(version)?;
    Some(format!("{}.{}", parsed.major, parsed.minor))
}

/// Sorted, unique minor lines of the given versions
pub fn get_minor_versions(versions: &[String]) -> Vec<String> {
    sort_versions(versions.iter().filter_map(|v| minor_version(v)))
}

/// Versions belonging to the `major.minor` line, ascending
pub fn filter_by_minor_version(minor: &str, versions: &[String]) -> Vec<String> {
    let Some(target) = parse_version(minor) else {
        warn!("Invalid minor version '{}'", minor);
        return Vec::new();
    };

    let mut matching: Vec<String> = versions
        .iter()
        .filter(|v| {
            parse_version(v)
                .is_some_and(|parsed| parsed.major == target.major && parsed.minor == target.minor)
        })
        .cloned()
        .collect();
    matching.sort_by(|a, b| compare_versions(a, b));
    matching
}
