//! `swiftpack targets` command

use anyhow::Result;

use crate::cli::{OutputFormat, TargetsArgs};
use swiftpack::core::TargetName;
use swiftpack::ops::{resolve_configuration, ResolveOptions};

pub fn execute(args: TargetsArgs, opts: &ResolveOptions) -> Result<()> {
    if args.all {
        return list_all(args.format);
    }

    let resolved = resolve_configuration(opts)?;
    let targets = resolved.configuration.apple_targets();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }
        OutputFormat::Text => {
            for target in &targets {
                println!("{:<24} {:<18} {}", target.name.as_str(), target.sdk, target.triple());
            }
        }
    }

    Ok(())
}

fn list_all(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TargetName::ALL)?);
        }
        OutputFormat::Text => {
            for name in TargetName::ALL {
                println!("{:<24} {}", name.as_str(), name.family());
            }
        }
    }
    Ok(())
}
