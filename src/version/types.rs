//! Release records returned by the Go downloads API

use serde::Deserialize;
use tracing::warn;

use crate::version::semver::sort_versions;

/// Prefix carried by every upstream version string (`go1.21.0`)
pub const VERSION_PREFIX: &str = "go";

/// One entry of `https://go.dev/dl/?mode=json&include=all`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub version: String,
    #[serde(default)]
    pub stable: bool,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

/// A downloadable artifact of a release
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReleaseFile {
    pub os: String,
    pub arch: String,
    pub kind: String,
    pub sha256: String,
}

impl Release {
    /// Version without the `go` prefix
    pub fn bare_version(&self) -> &str {
        self.version
            .strip_prefix(VERSION_PREFIX)
            .unwrap_or(&self.version)
    }
}

/// Extract the stable versions, without prefix, de-duplicated and sorted
pub fn stable_versions(releases: &[Release]) -> Vec<String> {
    let versions = releases
        .iter()
        .filter(|release| release.stable)
        .map(|release| release.bare_version().to_string());

    let sorted = sort_versions(versions);
    if sorted.is_empty() {
        warn!("No stable versions in {} releases", releases.len());
    }
    sorted
}

/// Find the release record for a bare version (`1.21.0` matches `go1.21.0`)
pub fn find_release<'a>(releases: &'a [Release], version: &str) -> Option<&'a Release> {
    let wanted = format!("{VERSION_PREFIX}{version}");
    releases.iter().find(|release| release.version == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn release(version: &str, stable: bool) -> Release {
        Release {
            version: version.to_string(),
            stable,
            files: vec![],
        }
    }

    #[test]
    fn release_deserializes_api_payload() {
        let result = serde_json::from_value::<Vec<Release>>(json!([
            {
                "version": "go1.21.0",
                "stable": true,
                "files": [
                    {
                        "filename": "go1.21.0.linux-amd64.tar.gz",
                        "os": "linux",
                        "arch": "amd64",
                        "version": "go1.21.0",
                        "sha256": "abc",
                        "size": 66618,
                        "kind": "archive"
                    },
                    {
                        "filename": "go1.21.0.src.tar.gz",
                        "os": "",
                        "arch": "",
                        "version": "go1.21.0",
                        "sha256": "def",
                        "size": 1000,
                        "kind": "source"
                    }
                ]
            },
            { "version": "go1.22rc1" }
        ]))
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].files.len(), 2);
        assert_eq!(result[0].files[0].arch, "amd64");
        assert_eq!(result[0].files[1].kind, "source");
        assert!(!result[1].stable);
        assert!(result[1].files.is_empty());
    }

    #[test]
    fn stable_versions_strips_prefix_and_skips_unstable() {
        let releases = vec![
            release("go1.22rc1", false),
            release("go1.21.0", true),
            release("go1.9.2", true),
            release("go1.21.0", true),
            release("go1.10", true),
        ];

        assert_eq!(
            stable_versions(&releases),
            vec!["1.9.2".to_string(), "1.10".to_string(), "1.21.0".to_string()]
        );
    }

    #[test]
    fn stable_versions_returns_empty_without_stable_releases() {
        assert!(stable_versions(&[release("go1.22rc1", false)]).is_empty());
    }

    #[test]
    fn find_release_matches_prefixed_version_exactly() {
        let releases = vec![release("go1.21.0", true), release("go1.21.1", true)];

        assert_eq!(
            find_release(&releases, "1.21.1").map(|r| r.version.as_str()),
            Some("go1.21.1")
        );
        assert!(find_release(&releases, "1.21").is_none());
    }
}
