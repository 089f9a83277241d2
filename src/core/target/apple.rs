//! Per-architecture build records handed to the toolchain.

use serde::Serialize;

use crate::core::names::PlatformVersion;

use super::name::{PlatformFamily, TargetName};

/// One architecture slice to compile, with everything the toolchain
/// invocation needs to pick an SDK and deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppleTarget {
    pub name: TargetName,
    pub family: PlatformFamily,
    /// `xcrun --sdk` name, e.g. `iphonesimulator`
    pub sdk: &'static str,
    /// Mach-O architecture, e.g. `arm64_32`
    pub architecture: &'static str,
    pub simulator: bool,
    pub min_version: PlatformVersion,
}

impl AppleTarget {
    /// Describe `name` built against `min_version`.
    pub fn new(name: TargetName, min_version: PlatformVersion) -> Self {
        let (sdk, architecture, simulator) = match name {
            TargetName::IosArm64 => ("iphoneos", "arm64", false),
            TargetName::IosX64 => ("iphonesimulator", "x86_64", true),
            TargetName::IosSimulatorArm64 => ("iphonesimulator", "arm64", true),
            TargetName::WatchosArm32 => ("watchos", "armv7k", false),
            TargetName::WatchosArm64 => ("watchos", "arm64_32", false),
            TargetName::WatchosDeviceArm64 => ("watchos", "arm64", false),
            TargetName::WatchosSimulatorArm64 => ("watchsimulator", "arm64", true),
            TargetName::TvosArm64 => ("appletvos", "arm64", false),
            TargetName::TvosX64 => ("appletvsimulator", "x86_64", true),
            TargetName::TvosSimulatorArm64 => ("appletvsimulator", "arm64", true),
            TargetName::MacosX64 => ("macosx", "x86_64", false),
            TargetName::MacosArm64 => ("macosx", "arm64", false),
        };

        AppleTarget {
            name,
            family: name.family(),
            sdk,
            architecture,
            simulator,
            min_version,
        }
    }

    /// Clang target triple, e.g. `arm64-apple-ios13.0-simulator`.
    pub fn triple(&self) -> String {
        let os = match self.family {
            PlatformFamily::Ios => "ios",
            PlatformFamily::WatchOs => "watchos",
            PlatformFamily::TvOs => "tvos",
            PlatformFamily::MacOs => "macos",
        };
        let version = if self.min_version.as_str().contains('.') {
            self.min_version.as_str().to_string()
        } else {
            format!("{}.0", self.min_version)
        };
        let suffix = if self.simulator { "-simulator" } else { "" };
        format!("{}-apple-{}{}{}", self.architecture, os, version, suffix)
    }
}
