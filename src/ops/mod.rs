//! High-level operations.
//!
//! This module contains the implementation of swiftpack commands.

pub mod resolve;
pub mod swiftpack_new;
pub mod swiftpack_plan;

pub use resolve::{load_raw_configuration, resolve_configuration, ResolveOptions, ResolvedConfiguration};
pub use swiftpack_new::{init_project, InitOptions};
pub use swiftpack_plan::{plan, ChecksumSource, PlanResult};
