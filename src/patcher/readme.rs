//! README patcher
//!
//! The role README shows an example variable and lists every supported
//! version as a bullet list:
//!
//! ```text
//! golang_version: '1.21.0'
//!
//! * `1.21.0`
//! * `1.20.1`
//! ```

use regex::{Captures, Regex};

use crate::patcher::traits::{PatchError, Patcher};
use crate::version::error::SelectError;

/// Patcher for the README example version and version list
pub struct ReadmePatcher {
    /// Supported versions, newest first, never empty
    versions: Vec<String>,
    /// Regex for the example variable: `golang_version: '1.2.3'`
    example_re: Regex,
    /// Regex for a block of version bullets: "* `1.2.3`"
    bullet_list_re: Regex,
}

impl ReadmePatcher {
    /// Creates a patcher from versions ordered newest first
    ///
    /// Fails with `SelectError::InsufficientData` when `versions` is empty.
    pub fn new(versions: Vec<String>) -> Result<Self, SelectError> {
        if versions.is_empty() {
            return Err(SelectError::InsufficientData {
                what: "local versions",
                needed: 1,
                found: 0,
            });
        }

        Ok(Self {
            versions,
            example_re: Regex::new(r"(?m)^(golang_version:\s')\d+\.\d+(?:\.\d+)?(')").unwrap(),
            bullet_list_re: Regex::new(r"(?m)^(?:\* `\d+\.\d+(?:\.\d+)?`(?:\n|$))+").unwrap(),
        })
    }

    fn formatted_list(&self) -> String {
        self.versions
            .iter()
            .map(|version| format!("* `{version}`\n"))
            .collect()
    }
}

impl Patcher for ReadmePatcher {
    fn patch(&self, content: &str) -> Result<String, PatchError> {
        let newest = &self.versions[0];

        let patched = self
            .example_re
            .replace_all(content, |caps: &Captures| {
                format!("{}{}{}", &caps[1], newest, &caps[2])
            });

        let list = self.formatted_list();
        let patched = self
            .bullet_list_re
            .replace_all(&patched, |_: &Captures| list.clone());

        Ok(patched.into_owned())
    }
}
