//! Implementation of `swiftpack init`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::PackageName;
use crate::util::config::{generate_default_config, MANIFEST_NAME};

/// Options for initializing a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Swift package name
    pub name: String,
}

/// Write a default SwiftPack.toml into `path`.
pub fn init_project(path: &Path, opts: &InitOptions) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{}` already exists in `{}`", MANIFEST_NAME, path.display());
    }

    let name = PackageName::of(&opts.name)?;
    let contents = generate_default_config(name.as_str())?;
    fs::write(&manifest_path, contents)
        .with_context(|| format!("failed to write {}", MANIFEST_NAME))?;

    tracing::debug!("wrote {}", manifest_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PluginConfiguration;
    use crate::util::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_valid_config() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "MyKit".to_string(),
        };

        init_project(tmp.path(), &opts).unwrap();

        let config = Config::load(&tmp.path().join(MANIFEST_NAME)).unwrap();
        let plugin = PluginConfiguration::of(&config).unwrap();
        assert_eq!(plugin.package_name.as_str(), "MyKit");
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("kit");
        let opts = InitOptions {
            name: "Kit".to_string(),
        };

        init_project(&dir, &opts).unwrap();
        assert!(dir.join(MANIFEST_NAME).exists());
    }

    #[test]
    fn test_init_name_with_quotes_reads_back() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "My\"Kit".to_string(),
        };

        init_project(tmp.path(), &opts).unwrap();

        let config = Config::load(&tmp.path().join(MANIFEST_NAME)).unwrap();
        assert_eq!(config.package.name.as_deref(), Some("My\"Kit"));
    }

    #[test]
    fn test_init_rejects_blank_name() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "  ".to_string(),
        };

        let err = init_project(tmp.path(), &opts).unwrap_err();
        assert!(err.to_string().contains("invalid package name"));
        assert!(!tmp.path().join(MANIFEST_NAME).exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_NAME), "").unwrap();
        let opts = InitOptions {
            name: "MyKit".to_string(),
        };

        let err = init_project(tmp.path(), &opts).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
