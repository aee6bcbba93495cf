pub mod registry;
pub mod role;

#[allow(unused_imports)]
pub use registry::{StaticReleaseSource, linux_release};
#[allow(unused_imports)]
pub use role::{TestRole, create_test_role};
