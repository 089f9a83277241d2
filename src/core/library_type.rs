//! Library linkage of the Swift package product.

use std::fmt;

use serde::Serialize;

use crate::core::error::ConfigError;

/// Linkage written to the `.library(type:)` product declaration.
///
/// An unconfigured library type is `None` at the use site, which leaves the
/// choice to SwiftPM; it is not the same as an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    /// Static library (`.static`)
    Static,
    /// Dynamic library (`.dynamic`)
    Dynamic,
}

impl LibraryType {
    /// Parse a library type, ignoring case.
    pub fn of(raw: &str) -> Result<Self, ConfigError> {
        match raw.to_lowercase().as_str() {
            "static" => Ok(LibraryType::Static),
            "dynamic" => Ok(LibraryType::Dynamic),
            _ => Err(ConfigError::InvalidLibraryType(raw.to_string())),
        }
    }

    /// Literal used in the manifest, e.g. `static`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryType::Static => "static",
            LibraryType::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
