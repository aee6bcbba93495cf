//! Release source implementations

pub mod go_dev;

pub use go_dev::GoDevRegistry;
