//! Implementation of `swiftpack plan`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::core::{ArtifactLayout, SwiftPackageConfiguration, TemplateProperties};
use crate::ops::resolve::ResolvedConfiguration;
use crate::util::diagnostic::suggestions;

/// Where the zip checksum comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumSource {
    /// Passed directly
    Value(String),
    /// Output of the checksum tool saved to a file
    File(PathBuf),
}

impl ChecksumSource {
    /// Pick the source from the two mutually exclusive CLI options.
    pub fn from_args(value: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (value, file) {
            (Some(value), None) => Ok(ChecksumSource::Value(value)),
            (None, Some(file)) => Ok(ChecksumSource::File(file)),
            (Some(_), Some(_)) => bail!("`--checksum` and `--checksum-file` are mutually exclusive"),
            (None, None) => bail!("a checksum is required to plan the package\n{}", suggestions::NO_CHECKSUM),
        }
    }

    /// Read the checksum text. Surrounding whitespace is kept; the plan trims it.
    pub fn read(&self) -> Result<String> {
        match self {
            ChecksumSource::Value(value) => Ok(value.clone()),
            ChecksumSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read checksum file: {}", path.display())),
        }
    }
}

/// A build plan together with its artifact paths.
#[derive(Debug, Clone)]
pub struct PlanResult {
    pub plan: SwiftPackageConfiguration,
    pub layout: ArtifactLayout,
}

impl PlanResult {
    pub fn template_properties(&self) -> TemplateProperties {
        self.plan.template_properties()
    }
}

/// Assemble the build plan for a resolved configuration.
pub fn plan(resolved: &ResolvedConfiguration, checksum: &ChecksumSource) -> Result<PlanResult> {
    let checksum = checksum.read()?;
    if checksum.trim().is_empty() {
        bail!("checksum is empty\n{}", suggestions::NO_CHECKSUM);
    }

    let plan = resolved.configuration.assemble(&checksum);
    let layout = resolved.layout();

    tracing::debug!(
        "planned `{}`: local path {}, url {}",
        plan.package_name(),
        plan.local_path(),
        plan.distribution_url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(PlanResult { plan, layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::resolve::{resolve_configuration, ResolveOptions};
    use crate::util::config::MANIFEST_NAME;
    use tempfile::TempDir;

    fn resolved(dir: &std::path::Path, manifest: &str) -> ResolvedConfiguration {
        std::fs::write(dir.join(MANIFEST_NAME), manifest).unwrap();
        resolve_configuration(&ResolveOptions {
            manifest_path: None,
            cwd: dir.to_path_buf(),
            global_config: None,
        })
        .unwrap()
    }

    const LOCAL: &str = r#"
[package]
name = "Shared"
version = "1.0"
swift-tools-version = "5.3"

[[platforms]]
family = "ios"
version = "13"
"#;

    #[test]
    fn test_plan_local_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolved(tmp.path(), LOCAL);

        let result = plan(&resolved, &ChecksumSource::Value(" abc123 \n".to_string())).unwrap();
        let props = result.template_properties();
        assert!(props.is_local);
        assert_eq!(props.url, None);
        assert_eq!(props.checksum, "abc123");
        assert_eq!(props.local_path, "./Shared.xcframework");
        assert_eq!(props.platforms, ".iOS(.v13)");
        assert_eq!(
            result.layout.zip,
            tmp.path().join("swiftpackage").join("Shared-1.0.zip")
        );
    }

    #[test]
    fn test_plan_reads_checksum_file() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolved(tmp.path(), LOCAL);
        let checksum_path = tmp.path().join("checksum.txt");
        std::fs::write(&checksum_path, "deadbeef\n").unwrap();

        let result = plan(&resolved, &ChecksumSource::File(checksum_path)).unwrap();
        assert_eq!(result.plan.checksum(), "deadbeef");
    }

    #[test]
    fn test_plan_rejects_blank_checksum() {
        let tmp = TempDir::new().unwrap();
        let resolved = resolved(tmp.path(), LOCAL);
        let err = plan(&resolved, &ChecksumSource::Value("  \n".to_string())).unwrap_err();
        assert!(err.to_string().contains("checksum is empty"));
    }

    #[test]
    fn test_checksum_source_from_args() {
        assert_eq!(
            ChecksumSource::from_args(Some("abc".to_string()), None).unwrap(),
            ChecksumSource::Value("abc".to_string())
        );
        assert!(ChecksumSource::from_args(None, None).is_err());
        assert!(
            ChecksumSource::from_args(Some("abc".to_string()), Some(PathBuf::from("x"))).is_err()
        );
    }
}
