//! `swiftpack layout` command

use anyhow::Result;

use crate::cli::{LayoutArgs, OutputFormat};
use swiftpack::ops::{resolve_configuration, ResolveOptions};

pub fn execute(args: LayoutArgs, opts: &ResolveOptions) -> Result<()> {
    let resolved = resolve_configuration(opts)?;
    let layout = resolved.layout();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        OutputFormat::Text => {
            println!("manifest     {}", layout.manifest.display());
            println!("xcframework  {}", layout.xcframework.display());
            println!("zip          {}", layout.zip.display());
        }
    }

    Ok(())
}
