//! `swiftpack plan` command

use anyhow::Result;

use crate::cli::{OutputFormat, PlanArgs};
use swiftpack::ops::{plan, resolve_configuration, ChecksumSource, ResolveOptions};

pub fn execute(args: PlanArgs, opts: &ResolveOptions) -> Result<()> {
    let checksum = ChecksumSource::from_args(args.checksum, args.checksum_file)?;
    let resolved = resolve_configuration(opts)?;
    let result = plan(&resolved, &checksum)?;
    let properties = result.template_properties();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&properties)?);
        }
        OutputFormat::Text => {
            for (key, value) in properties.to_map() {
                println!("{} = {}", key, value);
            }
        }
    }

    Ok(())
}
