//! Configuration resolution operations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{ArtifactLayout, PluginConfiguration};
use crate::util::config::{find_manifest, load_config, Config};

/// Where to look for configuration.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Explicit SwiftPack.toml path; searched upward from `cwd` when absent
    pub manifest_path: Option<PathBuf>,

    /// Directory to start the manifest search from
    pub cwd: PathBuf,

    /// User-wide defaults file, if any
    pub global_config: Option<PathBuf>,
}

/// A validated configuration and where it came from.
#[derive(Debug, Clone)]
pub struct ResolvedConfiguration {
    /// The SwiftPack.toml that was loaded
    pub manifest_path: PathBuf,

    /// Directory containing the manifest
    pub project_root: PathBuf,

    pub configuration: PluginConfiguration,
}

impl ResolvedConfiguration {
    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.configuration
            .output_directory
            .resolve(&self.project_root)
    }

    /// Artifact paths under the output directory.
    pub fn layout(&self) -> ArtifactLayout {
        ArtifactLayout::new(
            &self.output_dir(),
            &self.configuration.package_name,
            &self.configuration.zip_file_name,
        )
    }
}

/// Locate and load the merged raw configuration.
pub fn load_raw_configuration(opts: &ResolveOptions) -> Result<(PathBuf, Config)> {
    let manifest_path = match &opts.manifest_path {
        Some(path) => path.clone(),
        None => find_manifest(&opts.cwd)?,
    };
    tracing::debug!("using manifest {}", manifest_path.display());

    let config = load_config(opts.global_config.as_deref(), &manifest_path)?;
    Ok((manifest_path, config))
}

/// Load and validate the configuration.
///
/// Validation failures are returned as a [`ConfigErrors`](crate::core::ConfigErrors)
/// inside the `anyhow::Error`, holding every error found.
pub fn resolve_configuration(opts: &ResolveOptions) -> Result<ResolvedConfiguration> {
    let (manifest_path, config) = load_raw_configuration(opts)?;

    let configuration = PluginConfiguration::of(&config)?;
    tracing::info!(
        "Resolved `{}` ({} slice(s), {})",
        configuration.package_name,
        configuration.apple_targets().len(),
        configuration.distribution_mode
    );

    let project_root = manifest_path
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();

    Ok(ResolvedConfiguration {
        manifest_path,
        project_root,
        configuration,
    })
}
