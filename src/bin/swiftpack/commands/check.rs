//! `swiftpack check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use swiftpack::core::PluginConfiguration;
use swiftpack::ops::{load_raw_configuration, ResolveOptions};
use swiftpack::util::diagnostic::emit_report;

pub fn execute(_args: CheckArgs, opts: &ResolveOptions, color: bool) -> Result<()> {
    let (manifest_path, config) = load_raw_configuration(opts)?;

    match PluginConfiguration::of(&config) {
        Ok(configuration) => {
            eprintln!(
                "     Checked `{}` ({} slice(s), distribution: {})",
                configuration.package_name,
                configuration.apple_targets().len(),
                configuration.distribution_mode
            );
            if !configuration.uses_default_zip_file_name() {
                tracing::debug!(
                    "custom zip name `{}`, Package.swift will reference it as-is",
                    configuration.zip_file_name
                );
            }
            Ok(())
        }
        Err(errors) => {
            emit_report(&errors, Some(&manifest_path), color);
            bail!("could not validate `{}`", manifest_path.display())
        }
    }
}
