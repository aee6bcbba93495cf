//! Patcher replacing every version-shaped token
//!
//! Used for the role test fixtures, which mention the installed version in
//! paths such as `/opt/go/1.21.0/bin`.

use regex::{NoExpand, Regex};

use crate::patcher::traits::{PatchError, Patcher};

/// Patcher rewriting `1.0`, `1.0.0`, `10.2.3`, ... to a single version
pub struct VersionTokenPatcher {
    version: String,
    /// Regex for a standalone version token
    token_re: Regex,
}

impl VersionTokenPatcher {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            token_re: Regex::new(r"\b\d+\.\d+(?:\.\d+)?\b").unwrap(),
        }
    }
}

impl Patcher for VersionTokenPatcher {
    fn patch(&self, content: &str) -> Result<String, PatchError> {
        Ok(self
            .token_re
            .replace_all(content, NoExpand(&self.version))
            .into_owned())
    }
}
