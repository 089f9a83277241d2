//! Target definitions - which slices get built.
//!
//! A platform family expands to a fixed set of architecture slices; a
//! declaration pairs slices with the minimum OS version they support.

mod apple;
mod name;
mod platform;

pub use self::apple::AppleTarget;
pub use self::name::{PlatformFamily, TargetName};
pub use self::platform::{
    apple_targets, render_platforms, Declaration, TargetPlatform, TargetPlatforms,
};
