//! Core data structures for swiftpack.
//!
//! This module contains the foundational types used throughout swiftpack:
//! - Validated names, versions and library types
//! - Error-accumulating validation
//! - Platform families, target slices and declarations
//! - Distribution modes
//! - The validated configuration and the build plan

pub mod build_configuration;
pub mod configuration;
pub mod distribution;
pub mod error;
pub mod library_type;
pub mod names;
pub mod package;
pub mod target;
pub mod validated;

pub use build_configuration::{BuildConfiguration, OutputDirectory};
pub use configuration::PluginConfiguration;
pub use distribution::DistributionMode;
pub use error::{ConfigError, ConfigErrors};
pub use library_type::LibraryType;
pub use names::{PackageName, PlatformVersion, SwiftToolVersion, ZipFileName};
pub use package::{ArtifactLayout, PackageParts, SwiftPackageConfiguration, TemplateProperties};
pub use target::{AppleTarget, PlatformFamily, TargetName, TargetPlatform, TargetPlatforms};
