//! YAML field patcher
//!
//! Rewrites the value of a version variable such as `golang_version` in role
//! defaults and molecule playbooks. The document is parsed with tree-sitter
//! so that only the scalar itself changes; quotes, comments and key order
//! stay byte for byte.

use std::ops::Range;

use regex::Regex;
use tracing::warn;

use crate::patcher::traits::{PatchError, Patcher};

/// Patcher for every `key: '<version>'` pair in a YAML document
pub struct YamlFieldPatcher {
    key: String,
    version: String,
    /// Regex for a complete version value: `1.2` or `1.2.3`
    version_re: Regex,
}

impl YamlFieldPatcher {
    pub fn new(key: &str, version: &str) -> Self {
        Self {
            key: key.to_string(),
            version: version.to_string(),
            version_re: Regex::new(r"^\d+\.\d+(?:\.\d+)?$").unwrap(),
        }
    }

    /// Collect the byte ranges of version values assigned to `self.key`
    fn find_values(&self, node: tree_sitter::Node, content: &str, ranges: &mut Vec<Range<usize>>) {
        if matches!(node.kind(), "block_mapping_pair" | "flow_pair")
            && let Some(key_node) = node.child_by_field_name("key")
            && self.get_node_text(key_node, content) == self.key
        {
            if let Some(value_node) = node.child_by_field_name("value")
                && let Some(range) = self.version_range(value_node, content)
            {
                ranges.push(range);
            }
            return;
        }

        // Recurse into children
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.find_values(child, content, ranges);
        }
    }

    /// Byte range of the version inside a value node, without quotes
    fn version_range(&self, value_node: tree_sitter::Node, content: &str) -> Option<Range<usize>> {
        let raw_text = &content[value_node.byte_range()];
        let trimmed = raw_text.trim();

        let has_quotes = trimmed.len() >= 2
            && ((trimmed.starts_with('\'') && trimmed.ends_with('\''))
                || (trimmed.starts_with('"') && trimmed.ends_with('"')));
        let version = if has_quotes {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };

        if !self.version_re.is_match(version) {
            return None;
        }

        // Adjust offsets for leading whitespace and quotes
        let leading = raw_text.len() - raw_text.trim_start().len();
        let start = value_node.start_byte() + leading + usize::from(has_quotes);
        Some(start..start + version.len())
    }

    /// Get text content of a node, removing quotes if present
    fn get_node_text(&self, node: tree_sitter::Node, content: &str) -> String {
        let text = &content[node.byte_range()];
        text.trim()
            .trim_start_matches('"')
            .trim_end_matches('"')
            .trim_start_matches('\'')
            .trim_end_matches('\'')
            .to_string()
    }
}

impl Patcher for YamlFieldPatcher {
    fn patch(&self, content: &str) -> Result<String, PatchError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_yaml::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set YAML language for tree-sitter: {}", e);
            PatchError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse YAML content");
            PatchError::ParseFailed("Failed to parse YAML".to_string())
        })?;

        let mut ranges = Vec::new();
        self.find_values(tree.root_node(), content, &mut ranges);
        if ranges.is_empty() {
            warn!("No '{}' version found in YAML document", self.key);
        }

        let mut patched = String::with_capacity(content.len());
        let mut last = 0;
        for range in ranges {
            patched.push_str(&content[last..range.start]);
            patched.push_str(&self.version);
            last = range.end;
        }
        patched.push_str(&content[last..]);

        Ok(patched)
    }
}
