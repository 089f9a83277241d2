//! The build plan: a validated Swift package ready for manifest rendering.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::core::distribution::DistributionMode;
use crate::core::library_type::LibraryType;
use crate::core::names::{PackageName, SwiftToolVersion, ZipFileName};

/// Name of the rendered manifest file.
pub const MANIFEST_FILE_NAME: &str = "Package.swift";

/// Already-validated inputs of a [`SwiftPackageConfiguration`].
#[derive(Debug, Clone)]
pub struct PackageParts {
    pub package_name: PackageName,
    pub project_version: String,
    pub swift_tools_version: SwiftToolVersion,
    /// Rendered `platforms:` text
    pub platforms: String,
    pub distribution_mode: DistributionMode,
    /// Checksum of the zip as printed by the checksum tool
    pub checksum: String,
    pub zip_file_name: ZipFileName,
    pub library_type: Option<LibraryType>,
}

/// A complete build plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftPackageConfiguration {
    package_name: PackageName,
    swift_tools_version: SwiftToolVersion,
    platforms: String,
    distribution_mode: DistributionMode,
    checksum: String,
    zip_file_name: ZipFileName,
    library_type: Option<LibraryType>,
    distribution_url: Option<Url>,
    local_path: String,
}

impl SwiftPackageConfiguration {
    /// Assemble a plan and resolve its derived values.
    pub fn new(parts: PackageParts) -> Self {
        let distribution_url = parts.distribution_mode.distribution_url(&parts.zip_file_name);
        let local_path = local_path(&parts.zip_file_name, &parts.package_name, &parts.project_version);

        SwiftPackageConfiguration {
            package_name: parts.package_name,
            swift_tools_version: parts.swift_tools_version,
            platforms: parts.platforms,
            distribution_mode: parts.distribution_mode,
            checksum: parts.checksum.trim().to_string(),
            zip_file_name: parts.zip_file_name,
            library_type: parts.library_type,
            distribution_url,
            local_path,
        }
    }

    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    pub fn zip_file_name(&self) -> &ZipFileName {
        &self.zip_file_name
    }

    pub fn distribution_mode(&self) -> &DistributionMode {
        &self.distribution_mode
    }

    /// Download URL of the zip; `None` for local distribution.
    pub fn distribution_url(&self) -> Option<&Url> {
        self.distribution_url.as_ref()
    }

    /// Path the manifest references for the unpacked XCFramework.
    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    /// Trimmed checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Values consumed by the `Package.swift` template.
    pub fn template_properties(&self) -> TemplateProperties {
        TemplateProperties {
            tools_version: self.swift_tools_version.as_str().to_string(),
            name: self.package_name.as_str().to_string(),
            platforms: self.platforms.clone(),
            is_local: self.distribution_mode.is_local(),
            url: self.distribution_url.as_ref().map(|u| u.to_string()),
            checksum: self.checksum.clone(),
            has_library_type: self.library_type.is_some(),
            library_type: self.library_type.map(|t| t.as_str().to_string()),
            local_path: self.local_path.clone(),
        }
    }

    /// Where the collaborators write their artifacts under `output_dir`.
    pub fn layout(&self, output_dir: &Path) -> ArtifactLayout {
        ArtifactLayout::new(output_dir, &self.package_name, &self.zip_file_name)
    }
}

/// Key/value data handed to the manifest template.
///
/// Key names and value shapes are a stable contract with the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    pub tools_version: String,
    pub name: String,
    pub platforms: String,
    pub is_local: bool,
    pub url: Option<String>,
    pub checksum: String,
    pub has_library_type: bool,
    pub library_type: Option<String>,
    pub local_path: String,
}

impl TemplateProperties {
    /// Properties keyed by template name, with `null` for absent values.
    pub fn to_map(&self) -> BTreeMap<&'static str, Value> {
        let optional = |v: &Option<String>| v.clone().map_or(Value::Null, Value::String);
        BTreeMap::from([
            ("toolsVersion", Value::String(self.tools_version.clone())),
            ("name", Value::String(self.name.clone())),
            ("platforms", Value::String(self.platforms.clone())),
            ("isLocal", Value::Bool(self.is_local)),
            ("url", optional(&self.url)),
            ("checksum", Value::String(self.checksum.clone())),
            ("hasLibraryType", Value::Bool(self.has_library_type)),
            ("libraryType", optional(&self.library_type)),
            ("localPath", Value::String(self.local_path.clone())),
        ])
    }
}

/// Artifact paths for the archiving and rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactLayout {
    pub manifest: PathBuf,
    pub xcframework: PathBuf,
    pub zip: PathBuf,
}

impl ArtifactLayout {
    pub fn new(output_dir: &Path, package_name: &PackageName, zip_file_name: &ZipFileName) -> Self {
        ArtifactLayout {
            manifest: output_dir.join(MANIFEST_FILE_NAME),
            xcframework: output_dir.join(format!("{}.xcframework", package_name)),
            zip: output_dir.join(zip_file_name.name_with_extension()),
        }
    }
}

/// Prefix check against the `<packageName>-<projectVersion>` convention.
///
/// A custom name that happens to start with the default prefix counts as
/// default.
pub fn is_default_zip_file_name(
    zip_file_name: &ZipFileName,
    package_name: &PackageName,
    project_version: &str,
) -> bool {
    zip_file_name
        .name_with_extension()
        .starts_with(&format!("{}-{}", package_name, project_version))
}

/// Path of the unpacked XCFramework relative to `Package.swift`.
///
/// Default zip naming references the canonical `<packageName>.xcframework`;
/// a custom zip name is referenced as-is, without its extension.
pub fn local_path(
    zip_file_name: &ZipFileName,
    package_name: &PackageName,
    project_version: &str,
) -> String {
    if is_default_zip_file_name(zip_file_name, package_name, project_version) {
        format!("./{}.xcframework", package_name)
    } else {
        format!("./{}", zip_file_name.name())
    }
}
