//! swiftpack - Swift package build planning for XCFramework distribution
//!
//! This crate turns loosely-typed build configuration into a validated
//! build plan: which architecture slices to build, how the XCFramework is
//! distributed, and the values needed to render `Package.swift`. Invalid
//! configuration is reported with every error at once.

pub mod core;
pub mod ops;
pub mod util;

pub use core::{
    configuration::PluginConfiguration, error::ConfigErrors,
    package::SwiftPackageConfiguration, target::TargetPlatforms,
};

pub use util::config::Config;
