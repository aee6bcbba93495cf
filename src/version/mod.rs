//! Version management layer for the Go role
//!
//! This module fetches the upstream release list, reads the versions the
//! role already ships checksums for, and works out what is missing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Differ    │────▶│  Checksum   │
//! │  (fetch)    │     │  (compare)  │     │  (write)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    Local    │────▶│   Select    │
//!                     │   (scan)    │     │(newest/EOL) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Trait for fetching the upstream release list
//! - [`registries`]: go.dev downloads API implementation
//! - [`types`]: Release records and stable version extraction
//! - [`local`]: Scanner for checksum files already present
//! - [`differ`]: Missing version computation over the active minor lines
//! - [`checksum`]: Checksum file writer
//! - [`select`]: Newest, oldest and end-of-life version selection
//! - [`semver`]: Version parsing, ordering and minor line helpers
//! - [`error`]: Error types for registry, store and selection operations

pub mod checksum;
pub mod differ;
pub mod error;
pub mod local;
pub mod registries;
pub mod registry;
pub mod select;
pub mod semver;
pub mod types;
