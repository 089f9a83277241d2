//! Build configuration and output directory of the framework build.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::ConfigError;

/// Kotlin/Native build configuration the frameworks are linked with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BuildConfiguration {
    #[default]
    Release,
    Debug,
    /// A custom configuration defined in the host build
    Custom(String),
}

impl BuildConfiguration {
    /// `release` and `debug` ignore case; other non-blank names are custom.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidBuildConfiguration(raw.to_string()));
        }
        Ok(match raw.to_lowercase().as_str() {
            "release" => BuildConfiguration::Release,
            "debug" => BuildConfiguration::Debug,
            _ => BuildConfiguration::Custom(raw.to_string()),
        })
    }

    /// Name as used by the framework link tasks, e.g. `Release`.
    pub fn name(&self) -> &str {
        match self {
            BuildConfiguration::Release => "Release",
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Custom(name) => name,
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directory receiving `Package.swift`, the XCFramework and the zip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OutputDirectory(PathBuf);

impl OutputDirectory {
    /// Directory name used when none is configured.
    pub const DEFAULT: &'static str = "swiftpackage";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        OutputDirectory(path.into())
    }

    /// Resolve against the project root unless already absolute.
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            project_root.join(&self.0)
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for OutputDirectory {
    fn default() -> Self {
        OutputDirectory(PathBuf::from(Self::DEFAULT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_configuration_parse() {
        assert_eq!(BuildConfiguration::of("RELEASE"), Ok(BuildConfiguration::Release));
        assert_eq!(BuildConfiguration::of("debug"), Ok(BuildConfiguration::Debug));
        assert_eq!(
            BuildConfiguration::of("Staging"),
            Ok(BuildConfiguration::Custom("Staging".to_string()))
        );
        assert_eq!(
            BuildConfiguration::of(" "),
            Err(ConfigError::InvalidBuildConfiguration(" ".to_string()))
        );
    }

    #[test]
    fn test_build_configuration_name() {
        assert_eq!(BuildConfiguration::default().name(), "Release");
        assert_eq!(BuildConfiguration::Custom("Beta".to_string()).to_string(), "Beta");
    }

    #[test]
    fn test_output_directory_resolve() {
        let root = Path::new("/work/project");
        assert_eq!(
            OutputDirectory::default().resolve(root),
            PathBuf::from("/work/project/swiftpackage")
        );
        assert_eq!(
            OutputDirectory::new("/tmp/out").resolve(root),
            PathBuf::from("/tmp/out")
        );
    }
}
