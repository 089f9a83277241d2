//! Validation of a raw [`Config`] into a [`PluginConfiguration`].
//!
//! Every field is validated independently. A failure in one field never
//! stops validation of the others, so a broken configuration is reported
//! with all of its errors at once, in declaration order.

use crate::core::build_configuration::{BuildConfiguration, OutputDirectory};
use crate::core::distribution::DistributionMode;
use crate::core::error::{ConfigError, ConfigErrors};
use crate::core::library_type::LibraryType;
use crate::core::names::{PackageName, PlatformVersion, SwiftToolVersion, ZipFileName};
use crate::core::package::{is_default_zip_file_name, PackageParts, SwiftPackageConfiguration};
use crate::core::target::{
    apple_targets, render_platforms, AppleTarget, PlatformFamily, TargetName, TargetPlatform,
    TargetPlatforms,
};
use crate::core::validated::Accumulator;
use crate::util::config::{Config, PlatformConfig};

/// Project version used when none is configured.
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// A fully validated configuration, ready to be assembled into a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfiguration {
    pub package_name: PackageName,
    pub project_version: String,
    pub swift_tools_version: SwiftToolVersion,
    pub zip_file_name: ZipFileName,
    pub library_type: Option<LibraryType>,
    pub build_configuration: BuildConfiguration,
    pub output_directory: OutputDirectory,
    pub distribution_mode: DistributionMode,
    pub target_platforms: Vec<TargetPlatform>,
}

impl PluginConfiguration {
    /// Validate `config`, collecting every error.
    pub fn of(config: &Config) -> Result<Self, ConfigErrors> {
        let mut acc = Accumulator::new();
        let package = &config.package;

        let project_version = package
            .version
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_VERSION.to_string());

        let package_name = match package.name.as_deref() {
            Some(name) => acc.check(PackageName::of(name)),
            None => {
                acc.push(missing("package.name"));
                None
            }
        };

        let swift_tools_version = match package.swift_tools_version.as_deref() {
            Some(version) => acc.check(SwiftToolVersion::of(version)),
            None => Some(SwiftToolVersion::default()),
        };

        let zip_file_name = match package.zip_file_name.as_deref() {
            Some(name) => acc.check(ZipFileName::of(name)),
            // Without a valid package name there is no default; the name
            // error is already recorded.
            None => package_name
                .as_ref()
                .and_then(|name| default_zip_file_name(name, &project_version).ok()),
        };

        let library_type = match package.library_type.as_deref() {
            Some(raw) => acc.check(LibraryType::of(raw)).map(Some),
            None => Some(None),
        };

        let build_configuration = match package.build_configuration.as_deref() {
            Some(raw) => acc.check(BuildConfiguration::of(raw)),
            None => Some(BuildConfiguration::default()),
        };

        let output_directory = package
            .output_directory
            .as_deref()
            .map(OutputDirectory::new)
            .unwrap_or_default();

        let distribution_mode = acc.check(DistributionMode::of(
            config.distribution.mode.as_deref(),
            config.distribution.url.as_deref(),
        ));

        let (target_platforms, platform_errors) = declare_platforms(&config.platforms).partition();
        let had_platform_errors = !platform_errors.is_empty();
        acc.extend(platform_errors);
        if target_platforms.is_empty() && !had_platform_errors {
            acc.push(missing("platforms"));
        }

        let errors = match acc.finish(()) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };

        match (
            package_name,
            swift_tools_version,
            zip_file_name,
            library_type,
            build_configuration,
            distribution_mode,
        ) {
            (
                Some(package_name),
                Some(swift_tools_version),
                Some(zip_file_name),
                Some(library_type),
                Some(build_configuration),
                Some(distribution_mode),
            ) if errors.is_empty() => {
                tracing::debug!(
                    "validated configuration for `{}` with {} platform declaration(s)",
                    package_name,
                    target_platforms.len()
                );
                Ok(PluginConfiguration {
                    package_name,
                    project_version,
                    swift_tools_version,
                    zip_file_name,
                    library_type,
                    build_configuration,
                    output_directory,
                    distribution_mode,
                    target_platforms,
                })
            }
            _ => Err(ConfigErrors::new(errors)),
        }
    }

    /// The `platforms:` text of `Package.swift`.
    pub fn platforms(&self) -> String {
        render_platforms(&self.target_platforms)
    }

    /// Every slice to build, without repeats.
    pub fn apple_targets(&self) -> Vec<AppleTarget> {
        apple_targets(&self.target_platforms)
    }

    /// Whether the zip name follows the `<packageName>-<projectVersion>` convention.
    pub fn uses_default_zip_file_name(&self) -> bool {
        is_default_zip_file_name(&self.zip_file_name, &self.package_name, &self.project_version)
    }

    /// Assemble the build plan with the checksum of the zipped XCFramework.
    pub fn assemble(&self, checksum: &str) -> SwiftPackageConfiguration {
        SwiftPackageConfiguration::new(PackageParts {
            package_name: self.package_name.clone(),
            project_version: self.project_version.clone(),
            swift_tools_version: self.swift_tools_version.clone(),
            platforms: self.platforms(),
            distribution_mode: self.distribution_mode.clone(),
            checksum: checksum.to_string(),
            zip_file_name: self.zip_file_name.clone(),
            library_type: self.library_type,
        })
    }
}

/// `<packageName>-<projectVersion>`, the zip name used when none is configured.
pub fn default_zip_file_name(
    package_name: &PackageName,
    project_version: &str,
) -> Result<ZipFileName, ConfigError> {
    ZipFileName::of(&format!("{}-{}", package_name, project_version))
}

/// Turn raw `[[platforms]]` entries into declarations, in order.
///
/// With a valid version the family and every target name are separate
/// declarations. Without one the entry contributes a single declaration
/// holding the version error followed by its family and target name errors.
pub fn declare_platforms(entries: &[PlatformConfig]) -> TargetPlatforms {
    let mut platforms = TargetPlatforms::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.family.is_none() && entry.targets.is_empty() {
            continue;
        }

        let version = match entry.version.as_deref() {
            Some(raw) => PlatformVersion::of(raw).map(|_| raw),
            None => Err(missing(&format!("platforms[{}].version", index))),
        };

        platforms = match version {
            Ok(version) => {
                let platforms = match entry.family.as_deref().map(PlatformFamily::of) {
                    Some(Ok(family)) => platforms.family(family, version),
                    Some(Err(e)) => platforms.reject(vec![e]),
                    None => platforms,
                };
                platforms.targets(&entry.targets, version)
            }
            Err(version_error) => {
                let mut errors = vec![version_error];
                errors.extend(
                    entry
                        .family
                        .as_deref()
                        .and_then(|family| PlatformFamily::of(family).err()),
                );
                errors.extend(
                    entry
                        .targets
                        .iter()
                        .filter_map(|name| TargetName::of(name).err()),
                );
                platforms.reject(errors)
            }
        };
    }
    platforms
}

fn missing(key: &str) -> ConfigError {
    ConfigError::MissingRequiredValue(key.to_string())
}
