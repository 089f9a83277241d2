//! Platform families and their architecture slices.

use std::fmt;

use serde::Serialize;

use crate::core::error::ConfigError;

/// An Apple operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// iOS and iPadOS
    Ios,
    /// watchOS
    WatchOs,
    /// tvOS
    TvOs,
    /// macOS
    MacOs,
}

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 4] = [
        PlatformFamily::Ios,
        PlatformFamily::WatchOs,
        PlatformFamily::TvOs,
        PlatformFamily::MacOs,
    ];

    /// Parse a family name, ignoring case.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        match raw.to_lowercase().as_str() {
            "ios" => Ok(PlatformFamily::Ios),
            "watchos" => Ok(PlatformFamily::WatchOs),
            "tvos" => Ok(PlatformFamily::TvOs),
            "macos" => Ok(PlatformFamily::MacOs),
            _ => Err(ConfigError::InvalidPlatformFamily(raw.to_string())),
        }
    }

    /// Every architecture slice built for this family.
    pub fn targets(&self) -> &'static [TargetName] {
        match self {
            PlatformFamily::Ios => &[
                TargetName::IosArm64,
                TargetName::IosX64,
                TargetName::IosSimulatorArm64,
            ],
            PlatformFamily::WatchOs => &[
                TargetName::WatchosArm32,
                TargetName::WatchosArm64,
                TargetName::WatchosDeviceArm64,
                TargetName::WatchosSimulatorArm64,
            ],
            PlatformFamily::TvOs => &[
                TargetName::TvosArm64,
                TargetName::TvosX64,
                TargetName::TvosSimulatorArm64,
            ],
            PlatformFamily::MacOs => &[TargetName::MacosX64, TargetName::MacosArm64],
        }
    }

    /// Name of the `SupportedPlatform` member in `Package.swift`.
    pub fn swift_name(&self) -> &'static str {
        match self {
            PlatformFamily::Ios => "iOS",
            PlatformFamily::WatchOs => "watchOS",
            PlatformFamily::TvOs => "tvOS",
            PlatformFamily::MacOs => "macOS",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Ios => "ios",
            PlatformFamily::WatchOs => "watchos",
            PlatformFamily::TvOs => "tvos",
            PlatformFamily::MacOs => "macos",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.swift_name())
    }
}

/// A concrete architecture slice.
///
/// Names follow the Kotlin/Native target naming used by the build that
/// produces the frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetName {
    IosArm64,
    IosX64,
    IosSimulatorArm64,
    WatchosArm32,
    WatchosArm64,
    WatchosDeviceArm64,
    WatchosSimulatorArm64,
    TvosArm64,
    TvosX64,
    TvosSimulatorArm64,
    MacosX64,
    MacosArm64,
}

impl TargetName {
    pub const ALL: [TargetName; 12] = [
        TargetName::IosArm64,
        TargetName::IosX64,
        TargetName::IosSimulatorArm64,
        TargetName::WatchosArm32,
        TargetName::WatchosArm64,
        TargetName::WatchosDeviceArm64,
        TargetName::WatchosSimulatorArm64,
        TargetName::TvosArm64,
        TargetName::TvosX64,
        TargetName::TvosSimulatorArm64,
        TargetName::MacosX64,
        TargetName::MacosArm64,
    ];

    /// Look up a target by its exact, case-sensitive name.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        TargetName::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| ConfigError::InvalidTargetName(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetName::IosArm64 => "iosArm64",
            TargetName::IosX64 => "iosX64",
            TargetName::IosSimulatorArm64 => "iosSimulatorArm64",
            TargetName::WatchosArm32 => "watchosArm32",
            TargetName::WatchosArm64 => "watchosArm64",
            TargetName::WatchosDeviceArm64 => "watchosDeviceArm64",
            TargetName::WatchosSimulatorArm64 => "watchosSimulatorArm64",
            TargetName::TvosArm64 => "tvosArm64",
            TargetName::TvosX64 => "tvosX64",
            TargetName::TvosSimulatorArm64 => "tvosSimulatorArm64",
            TargetName::MacosX64 => "macosX64",
            TargetName::MacosArm64 => "macosArm64",
        }
    }

    /// The family this slice belongs to.
    pub fn family(&self) -> PlatformFamily {
        match self {
            TargetName::IosArm64 | TargetName::IosX64 | TargetName::IosSimulatorArm64 => {
                PlatformFamily::Ios
            }
            TargetName::WatchosArm32
            | TargetName::WatchosArm64
            | TargetName::WatchosDeviceArm64
            | TargetName::WatchosSimulatorArm64 => PlatformFamily::WatchOs,
            TargetName::TvosArm64 | TargetName::TvosX64 | TargetName::TvosSimulatorArm64 => {
                PlatformFamily::TvOs
            }
            TargetName::MacosX64 | TargetName::MacosArm64 => PlatformFamily::MacOs,
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
