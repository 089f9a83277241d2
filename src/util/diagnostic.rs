//! User-friendly diagnostic messages.
//!
//! Every configuration error is reported with the offending input and, where
//! one exists, a suggested fix. All errors of a configuration are printed in
//! one report.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;

use crate::core::error::{ConfigError, ConfigErrors};

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no SwiftPack.toml is found.
    pub const NO_MANIFEST: &str = "help: Run `swiftpack init` to create a SwiftPack.toml";

    /// Suggestion when the plan needs a checksum.
    pub const NO_CHECKSUM: &str =
        "help: Pass `--checksum <sha256>` or `--checksum-file <path>` (e.g. from `swift package compute-checksum`)";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Diagnostic code, e.g. `swiftpack::config::invalid_target_name`
    pub code: Option<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            code: None,
            suggestions: Vec::new(),
            location: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let label = if color { "\x1b[1;31merror\x1b[0m" } else { "error" };

        match &self.code {
            Some(code) => output.push_str(&format!("{}[{}]: {}\n", label, code, self.message)),
            None => output.push_str(&format!("{}: {}\n", label, self.message)),
        }

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        let help_prefix = if color { "\x1b[1;32mhelp\x1b[0m" } else { "help" };
        for suggestion in &self.suggestions {
            output.push_str(&format!("  {}: {}\n", help_prefix, suggestion));
        }

        output
    }
}

impl From<&ConfigError> for Diagnostic {
    fn from(error: &ConfigError) -> Self {
        let mut diag = Diagnostic::error(error.to_string());
        if let Some(code) = error.code() {
            diag = diag.with_code(code.to_string());
        }
        if let Some(help) = error.help() {
            diag = diag.with_suggestion(help.to_string());
        }
        diag
    }
}

/// Render every error of `errors` followed by a summary line.
pub fn format_report(errors: &ConfigErrors, location: Option<&PathBuf>, color: bool) -> String {
    let mut output = String::new();
    for error in errors {
        let mut diag = Diagnostic::from(error);
        if let Some(path) = location {
            diag = diag.with_location(path.clone());
        }
        output.push_str(&diag.format(color));
    }
    output.push_str(&format!("\n{}\n", errors));
    output
}

/// Print a whole error report to stderr.
pub fn emit_report(errors: &ConfigErrors, location: Option<&PathBuf>, color: bool) {
    eprint!("{}", format_report(errors, location, color));
}
