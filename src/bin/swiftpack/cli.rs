//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// swiftpack - Plan Swift packages that ship prebuilt XCFrameworks
#[derive(Parser)]
#[command(name = "swiftpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to SwiftPack.toml (defaults to searching upward from the current directory)
    #[arg(long, global = true, env = "SWIFTPACK_MANIFEST")]
    pub manifest_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate SwiftPack.toml and report every error
    Check(CheckArgs),

    /// Print the values used to render Package.swift
    Plan(PlanArgs),

    /// List the architecture slices to build
    Targets(TargetsArgs),

    /// Show where build artifacts are written
    Layout(LayoutArgs),

    /// Write a default SwiftPack.toml
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for machine-readable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
pub struct CheckArgs {}

#[derive(Args)]
pub struct PlanArgs {
    /// SHA-256 checksum of the XCFramework zip
    #[arg(long, conflicts_with = "checksum_file")]
    pub checksum: Option<String>,

    /// File containing the checksum
    #[arg(long)]
    pub checksum_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// List every supported target name instead of the configured ones
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct InitArgs {
    /// Package name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
