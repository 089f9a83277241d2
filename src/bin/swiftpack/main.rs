//! swiftpack CLI - build planning for Swift packages distributed as XCFrameworks

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use swiftpack::core::ConfigErrors;
use swiftpack::ops::ResolveOptions;
use swiftpack::util::config::global_config_path;
use swiftpack::util::diagnostic::emit_report;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<ConfigErrors>() {
            Some(errors) => emit_report(errors, None, color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("swiftpack=debug")
    } else {
        EnvFilter::new("swiftpack=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .init();

    let opts = ResolveOptions {
        manifest_path: cli.manifest_path,
        cwd: std::env::current_dir()?,
        global_config: global_config_path(),
    };

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &opts, color),
        Commands::Plan(args) => commands::plan::execute(args, &opts),
        Commands::Targets(args) => commands::targets::execute(args, &opts),
        Commands::Layout(args) => commands::layout::execute(args, &opts),
        Commands::Init(args) => commands::init::execute(args, &opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
