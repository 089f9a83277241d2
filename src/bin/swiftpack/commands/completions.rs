//! `swiftpack completions` command

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionsArgs};

pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout().lock())
}

/// Write the completion script for `shell` to `out`.
fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_cover_every_subcommand() {
        let mut out = Vec::new();
        write_completions(Shell::Zsh, &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("#compdef swiftpack"));
        for subcommand in ["check", "plan", "targets", "layout", "init", "completions"] {
            assert!(script.contains(subcommand), "missing `{subcommand}`");
        }
    }
}
