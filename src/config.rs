use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::version::checksum::DEFAULT_ARCHITECTURES;
use crate::version::registries::go_dev::DEFAULT_DOWNLOAD_URL;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for the release list request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Updater configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdaterConfig {
    /// Go downloads API endpoint
    pub download_url: String,
    /// Release list request timeout in milliseconds
    pub fetch_timeout_ms: u64,
    /// Architectures to write checksum files for
    pub architectures: Vec<String>,
    pub layout: RoleLayout,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            architectures: DEFAULT_ARCHITECTURES.iter().map(|a| a.to_string()).collect(),
            layout: RoleLayout::default(),
        }
    }
}

impl UpdaterConfig {
    /// Load the configuration from a JSON file
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Role-relative locations of the files the updater reads and writes
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleLayout {
    pub versions_dir: PathBuf,
    pub readme: PathBuf,
    pub defaults: PathBuf,
    pub test_fixture: PathBuf,
    pub eol_test_fixture: PathBuf,
    pub eol_converge: PathBuf,
}

impl Default for RoleLayout {
    fn default() -> Self {
        Self {
            versions_dir: PathBuf::from("vars/versions"),
            readme: PathBuf::from("README.md"),
            defaults: PathBuf::from("defaults/main.yml"),
            test_fixture: PathBuf::from("molecule/default/tests/test_role.py"),
            eol_test_fixture: PathBuf::from("molecule/ubuntu-max-go-eol/tests/test_role.py"),
            eol_converge: PathBuf::from("molecule/ubuntu-max-go-eol/converge.yml"),
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn updater_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<UpdaterConfig>(json!({
            "fetchTimeoutMs": 1000,
            "layout": {
                "readme": "docs/README.md"
            }
        }))
        .unwrap();

        assert_eq!(result.fetch_timeout_ms, 1000);
        assert_eq!(result.download_url, DEFAULT_DOWNLOAD_URL);
        assert_eq!(result.layout.readme, PathBuf::from("docs/README.md"));
        assert_eq!(result.layout.versions_dir, PathBuf::from("vars/versions"));
    }

    #[test]
    fn updater_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<UpdaterConfig>(json!({
            "downloadUrl": "http://localhost:8080/dl/?mode=json&include=all",
            "fetchTimeoutMs": 5000,
            "architectures": ["amd64"],
            "layout": {
                "versionsDir": "vars/go",
                "readme": "README.rst",
                "defaults": "defaults/go.yml",
                "testFixture": "tests/test_default.py",
                "eolTestFixture": "tests/test_eol.py",
                "eolConverge": "tests/eol.yml"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            UpdaterConfig {
                download_url: "http://localhost:8080/dl/?mode=json&include=all".to_string(),
                fetch_timeout_ms: 5000,
                architectures: vec!["amd64".to_string()],
                layout: RoleLayout {
                    versions_dir: PathBuf::from("vars/go"),
                    readme: PathBuf::from("README.rst"),
                    defaults: PathBuf::from("defaults/go.yml"),
                    test_fixture: PathBuf::from("tests/test_default.py"),
                    eol_test_fixture: PathBuf::from("tests/test_eol.py"),
                    eol_converge: PathBuf::from("tests/eol.yml"),
                },
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("updater.json");
        std::fs::write(&path, r#"{"architectures": ["arm64"]}"#).unwrap();

        let config = UpdaterConfig::load(&path).unwrap();

        assert_eq!(config.architectures, vec!["arm64".to_string()]);
        assert_eq!(config.layout, RoleLayout::default());
    }

    #[test]
    fn load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("updater.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            UpdaterConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        assert!(matches!(
            UpdaterConfig::load(&temp_dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
