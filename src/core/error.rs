//! Configuration errors.
//!
//! Every validation failure is a [`ConfigError`] carrying the raw input that
//! caused it. Failures from independent fields are gathered into a single
//! [`ConfigErrors`] report so the user sees all of them in one pass.

use miette::Diagnostic;
use thiserror::Error;

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid package name `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_package_name),
        help("The package name must not be blank")
    )]
    InvalidPackageName(String),

    #[error("invalid zip file name `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_zip_file_name),
        help("The zip file name must not be blank; omit the `.zip` extension")
    )]
    InvalidZipFileName(String),

    #[error("invalid swift tools version `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_tool_version),
        help("Use a dotted numeric version such as `5.3` or `5.9.1`")
    )]
    InvalidToolVersion(String),

    #[error("invalid platform version `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_platform_version),
        help("Use a dotted numeric minimum OS version such as `13` or `10.15`")
    )]
    InvalidPlatformVersion(String),

    #[error("invalid library type `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_library_type),
        help("Library type must be either `static` or `dynamic`")
    )]
    InvalidLibraryType(String),

    #[error("invalid target name `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_target_name),
        help("Run `swiftpack targets --all` to list the supported target names")
    )]
    InvalidTargetName(String),

    #[error("invalid platform family `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_platform_family),
        help("Platform family must be one of: ios, watchos, tvos, macos")
    )]
    InvalidPlatformFamily(String),

    #[error("invalid distribution mode `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_distribution_mode),
        help("Distribution mode must be either `local` or `remote`")
    )]
    InvalidDistributionMode(String),

    #[error("invalid distribution url `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_distribution_url),
        help("Use an absolute URL such as `https://example.com/releases`")
    )]
    InvalidDistributionUrl(String),

    #[error("invalid build configuration `{0}`")]
    #[diagnostic(
        code(swiftpack::config::invalid_build_configuration),
        help("Use `release`, `debug`, or the name of a custom configuration")
    )]
    InvalidBuildConfiguration(String),

    #[error("missing required value `{0}`")]
    #[diagnostic(code(swiftpack::config::missing_required_value))]
    MissingRequiredValue(String),
}

impl ConfigError {
    /// The raw input (or missing key) this error reports.
    pub fn input(&self) -> &str {
        match self {
            ConfigError::InvalidPackageName(s)
            | ConfigError::InvalidZipFileName(s)
            | ConfigError::InvalidToolVersion(s)
            | ConfigError::InvalidPlatformVersion(s)
            | ConfigError::InvalidLibraryType(s)
            | ConfigError::InvalidTargetName(s)
            | ConfigError::InvalidPlatformFamily(s)
            | ConfigError::InvalidDistributionMode(s)
            | ConfigError::InvalidDistributionUrl(s)
            | ConfigError::InvalidBuildConfiguration(s)
            | ConfigError::MissingRequiredValue(s) => s,
        }
    }
}

/// Every validation failure found in one configuration, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid configuration: {} {}", .errors.len(), noun(.errors.len()))]
#[diagnostic(
    code(swiftpack::config::invalid),
    help("Fix the errors above in SwiftPack.toml and run `swiftpack check` again")
)]
pub struct ConfigErrors {
    #[related]
    errors: Vec<ConfigError>,
}

impl ConfigErrors {
    /// Wrap a list of errors.
    pub fn new(errors: Vec<ConfigError>) -> Self {
        ConfigErrors { errors }
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the errors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<ConfigError> {
        self.errors
    }
}

fn noun(count: usize) -> &'static str {
    if count == 1 {
        "error"
    } else {
        "errors"
    }
}

impl From<Vec<ConfigError>> for ConfigErrors {
    fn from(errors: Vec<ConfigError>) -> Self {
        ConfigErrors::new(errors)
    }
}

impl<'a> IntoIterator for &'a ConfigErrors {
    type Item = &'a ConfigError;
    type IntoIter = std::slice::Iter<'a, ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_raw_input() {
        let err = ConfigError::InvalidLibraryType("weird".to_string());
        assert_eq!(err.input(), "weird");
        assert_eq!(err.to_string(), "invalid library type `weird`");
    }

    #[test]
    fn test_errors_display_counts() {
        let one = ConfigErrors::new(vec![ConfigError::InvalidPackageName(String::new())]);
        assert_eq!(one.to_string(), "invalid configuration: 1 error");

        let two = ConfigErrors::new(vec![
            ConfigError::InvalidPackageName(String::new()),
            ConfigError::InvalidTargetName("bogus".to_string()),
        ]);
        assert_eq!(two.to_string(), "invalid configuration: 2 errors");
        assert_eq!(
            two.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "invalid package name ``".to_string(),
                "invalid target name `bogus`".to_string(),
            ]
        );
    }

    #[test]
    fn test_errors_related_diagnostics_keep_order() {
        let errors = ConfigErrors::new(vec![
            ConfigError::InvalidZipFileName(" ".to_string()),
            ConfigError::MissingRequiredValue("package.name".to_string()),
        ]);
        let related: Vec<String> = errors
            .related()
            .map(|r| r.map(|d| d.to_string()).collect())
            .unwrap_or_default();
        assert_eq!(
            related,
            vec![
                "invalid zip file name ` `".to_string(),
                "missing required value `package.name`".to_string(),
            ]
        );
    }
}
