//! `swiftpack init` command

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::InitArgs;
use swiftpack::ops::{init_project, InitOptions, ResolveOptions};

/// Package name from the arguments, or the directory name.
pub fn determine_package_name(name: &Option<String>, path: &Path) -> String {
    name.clone().unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    })
}

pub fn execute(args: InitArgs, opts: &ResolveOptions) -> Result<()> {
    let path = match args.path {
        Some(path) if path.is_absolute() => path,
        Some(path) => opts.cwd.join(path),
        None => opts.cwd.clone(),
    };

    let name = determine_package_name(&args.name, &canonical_or(&path));
    init_project(&path, &InitOptions { name: name.clone() })?;

    eprintln!("     Initialized `{}` in {}", name, path.display());
    Ok(())
}

fn canonical_or(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_init_args(args: &[&str]) -> InitArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            init: InitArgs,
        }
        TestCli::parse_from(args).init
    }

    #[test]
    fn test_init_args_defaults() {
        let args = parse_init_args(&["test"]);
        assert!(args.name.is_none());
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_args_with_name_and_path() {
        let args = parse_init_args(&["test", "--name", "MyKit", "--path", "kit"]);
        assert_eq!(args.name, Some("MyKit".to_string()));
        assert_eq!(args.path, Some(PathBuf::from("kit")));
    }

    #[test]
    fn test_determine_package_name_with_explicit_name() {
        let name = Some("MyKit".to_string());
        assert_eq!(determine_package_name(&name, Path::new("/some/other")), "MyKit");
    }

    #[test]
    fn test_determine_package_name_from_path() {
        assert_eq!(determine_package_name(&None, Path::new("/home/user/Shared")), "Shared");
    }

    #[test]
    fn test_determine_package_name_fallback() {
        assert_eq!(determine_package_name(&None, Path::new("/")), "unnamed");
    }
}
