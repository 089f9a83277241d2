//! Configuration file support for swiftpack.
//!
//! swiftpack reads two configuration file locations:
//! - Global: `~/.swiftpack/config.toml` - User-wide defaults
//! - Project: `SwiftPack.toml` - The package being built
//!
//! Project config takes precedence over global config.
//!
//! Values are kept as raw strings here; turning them into validated values
//! is the job of [`PluginConfiguration`](crate::core::PluginConfiguration).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::names::SwiftToolVersion;
use crate::util::diagnostic::suggestions;

/// Name of the project configuration file.
pub const MANIFEST_NAME: &str = "SwiftPack.toml";

/// Raw swiftpack configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Package settings
    pub package: PackageConfig,

    /// Distribution settings
    pub distribution: DistributionConfig,

    /// Platform declarations, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformConfig>,
}

/// `[package]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PackageConfig {
    /// Swift package name
    pub name: Option<String>,

    /// Project version, used for the default zip file name
    pub version: Option<String>,

    /// `// swift-tools-version:` header (default 5.3)
    pub swift_tools_version: Option<String>,

    /// Zip file name without extension (default `<name>-<version>`)
    pub zip_file_name: Option<String>,

    /// `static` or `dynamic`; unset leaves the choice to SwiftPM
    pub library_type: Option<String>,

    /// `release`, `debug` or a custom configuration name
    pub build_configuration: Option<String>,

    /// Output directory relative to the project (default `swiftpackage`)
    pub output_directory: Option<String>,
}

/// `[distribution]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DistributionConfig {
    /// `local` or `remote`
    pub mode: Option<String>,

    /// Base URL for remote distribution
    pub url: Option<String>,
}

/// One `[[platforms]]` entry.
///
/// Either a whole `family` or a list of individual `targets`, with the
/// minimum OS `version` both share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlatformConfig {
    /// `ios`, `watchos`, `tvos` or `macos`
    pub family: Option<String>,

    /// Individual target names, e.g. `iosArm64`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,

    /// Minimum OS version, e.g. `13`
    pub version: Option<String>,
}

impl PlatformConfig {
    /// Declaration of every slice of `family`.
    pub fn family(family: impl Into<String>, version: impl Into<String>) -> Self {
        PlatformConfig {
            family: Some(family.into()),
            targets: Vec::new(),
            version: Some(version.into()),
        }
    }

    /// Declaration of individual slices.
    pub fn targets<I, S>(targets: I, version: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PlatformConfig {
            family: None,
            targets: targets.into_iter().map(Into::into).collect(),
            version: Some(version.into()),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Platform declarations are replaced as a whole, never interleaved.
    pub fn merge(&mut self, other: Config) {
        // Package settings
        if other.package.name.is_some() {
            self.package.name = other.package.name;
        }
        if other.package.version.is_some() {
            self.package.version = other.package.version;
        }
        if other.package.swift_tools_version.is_some() {
            self.package.swift_tools_version = other.package.swift_tools_version;
        }
        if other.package.zip_file_name.is_some() {
            self.package.zip_file_name = other.package.zip_file_name;
        }
        if other.package.library_type.is_some() {
            self.package.library_type = other.package.library_type;
        }
        if other.package.build_configuration.is_some() {
            self.package.build_configuration = other.package.build_configuration;
        }
        if other.package.output_directory.is_some() {
            self.package.output_directory = other.package.output_directory;
        }

        // Distribution settings
        if other.distribution.mode.is_some() {
            self.distribution.mode = other.distribution.mode;
        }
        if other.distribution.url.is_some() {
            self.distribution.url = other.distribution.url;
        }

        if !other.platforms.is_empty() {
            self.platforms = other.platforms;
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (SwiftPack.toml)
/// 2. Global config (~/.swiftpack/config.toml)
/// 3. Defaults
///
/// A broken global config is reported and ignored; a broken project config
/// is an error.
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    // Load global config first
    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config from {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    // Project config overrides global
    let project = Config::load(project_path)?;
    config.merge(project);

    Ok(config)
}

/// Get the global swiftpack config directory (`SWIFTPACK_HOME`, or ~/.swiftpack).
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("SWIFTPACK_HOME")
        .map(PathBuf::from)
        .or_else(|| directories::BaseDirs::new().map(|b| b.home_dir().join(".swiftpack")))
}

/// Get the global config path (~/.swiftpack/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Find `SwiftPack.toml` in `start` or any of its ancestors.
pub fn find_manifest(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    bail!(
        "could not find `{}` in `{}` or any parent directory\n{}",
        MANIFEST_NAME,
        start.display(),
        suggestions::NO_MANIFEST
    )
}

/// Generate a default SwiftPack.toml for a new package.
pub fn generate_default_config(name: &str) -> Result<String> {
    Config {
        package: PackageConfig {
            name: Some(name.to_string()),
            version: Some("0.1.0".to_string()),
            swift_tools_version: Some(SwiftToolVersion::DEFAULT.to_string()),
            ..PackageConfig::default()
        },
        distribution: DistributionConfig {
            mode: Some("local".to_string()),
            url: None,
        },
        platforms: vec![PlatformConfig::family("ios", "13")],
    }
    .to_toml()
}
