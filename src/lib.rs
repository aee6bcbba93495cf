//! Maintenance tool for an Ansible role that installs Go
//!
//! - [`version`]: Upstream releases, local checksum files and version selection
//! - [`patcher`]: Rewriting of the README, role defaults and test fixtures
//! - [`updater`]: The sequential maintenance run tying both together
//! - [`config`]: Role layout and fetch settings
//! - [`logging`]: Log subscriber setup for the binary

pub mod config;
pub mod logging;
pub mod patcher;
pub mod updater;
pub mod version;
