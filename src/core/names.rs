//! Validated name and version values.
//!
//! Each type can only be obtained through its `of` constructor, so holding
//! one means the raw input already passed validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::error::ConfigError;

/// Dotted numeric version with one to three components, e.g. `5`, `5.3`, `10.15.4`.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+){0,2}$").expect("version pattern is a valid regex")
});

fn is_version(raw: &str) -> bool {
    VERSION_PATTERN.is_match(raw)
}

/// Name of the Swift package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Validate a package name. Blank names are rejected.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            Err(ConfigError::InvalidPackageName(raw.to_string()))
        } else {
            Ok(PackageName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the zip archive holding the XCFramework, without the `.zip` extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZipFileName(String);

impl ZipFileName {
    /// File extension appended by the archiver.
    pub const EXTENSION: &'static str = "zip";

    /// Validate a zip file name. Blank names are rejected.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            Err(ConfigError::InvalidZipFileName(raw.to_string()))
        } else {
            Ok(ZipFileName(raw.to_string()))
        }
    }

    /// Name without extension.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Name as written to disk, e.g. `MyKit-1.2.3.zip`.
    pub fn name_with_extension(&self) -> String {
        format!("{}.{}", self.0, Self::EXTENSION)
    }
}

impl fmt::Display for ZipFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Version written to the `// swift-tools-version:` header of `Package.swift`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SwiftToolVersion(String);

impl SwiftToolVersion {
    /// Tools version used when none is configured.
    pub const DEFAULT: &'static str = "5.3";

    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        if is_version(raw) {
            Ok(SwiftToolVersion(raw.to_string()))
        } else {
            Err(ConfigError::InvalidToolVersion(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SwiftToolVersion {
    fn default() -> Self {
        SwiftToolVersion(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SwiftToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimum OS version required by a platform, e.g. `13` or `10.15`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlatformVersion(String);

impl PlatformVersion {
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        if is_version(raw) {
            Ok(PlatformVersion(raw.to_string()))
        } else {
            Err(ConfigError::InvalidPlatformVersion(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Version as a `SupportedPlatform` version member, e.g. `.v10_15`.
    pub fn swift_literal(&self) -> String {
        format!(".v{}", self.0.replace('.', "_"))
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
