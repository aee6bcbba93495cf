//! Document patching layer
//! - traits.rs: Patcher trait definition and PatchError
//! - file.rs: In-place file patching that skips unchanged files
//! - readme.rs: README example version and version list
//! - yaml_field.rs: YAML version variables (role defaults, molecule playbooks)
//! - version_token.rs: Version tokens in test fixtures

pub mod file;
pub mod readme;
pub mod traits;
pub mod version_token;
pub mod yaml_field;

pub use file::patch_file;
pub use readme::ReadmePatcher;
pub use traits::{PatchError, Patcher};
pub use version_token::VersionTokenPatcher;
pub use yaml_field::YamlFieldPatcher;
