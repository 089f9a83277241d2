//! How the zipped XCFramework reaches consumers of the package.

use std::fmt;

use url::Url;

use crate::core::error::ConfigError;
use crate::core::names::ZipFileName;

/// Distribution of the binary target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistributionMode {
    /// The XCFramework sits next to `Package.swift` and is referenced by path.
    #[default]
    Local,
    /// The zip is uploaded under this base URL and fetched by checksum.
    Remote(Url),
}

impl DistributionMode {
    /// Remote distribution rooted at `raw`.
    ///
    /// The URL must be absolute and able to carry path segments.
    pub fn remote(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidDistributionUrl(raw.to_string());
        let url = Url::parse(raw).map_err(|_| invalid())?;
        if url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(DistributionMode::Remote(url))
    }

    /// Build from the raw `mode`/`url` pair of the configuration file.
    ///
    /// No mode means local. A remote mode without a URL is a missing value;
    /// a URL given with an explicit local mode is ignored with a warning.
    pub fn of(mode: Option<&str>, url: Option<&str>) -> Result<Self, ConfigError> {
        let mode = match mode {
            Some(mode) => mode,
            None if url.is_some() => "remote",
            None => return Ok(DistributionMode::Local),
        };

        match mode.to_lowercase().as_str() {
            "local" => {
                if let Some(url) = url {
                    tracing::warn!("ignoring distribution url `{}` for local distribution", url);
                }
                Ok(DistributionMode::Local)
            }
            "remote" => match url {
                Some(url) => DistributionMode::remote(url),
                None => Err(ConfigError::MissingRequiredValue(
                    "distribution.url".to_string(),
                )),
            },
            _ => Err(ConfigError::InvalidDistributionMode(mode.to_string())),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DistributionMode::Local)
    }

    /// Where consumers download the zip; `None` for local distribution.
    pub fn distribution_url(&self, zip_file_name: &ZipFileName) -> Option<Url> {
        match self {
            DistributionMode::Local => None,
            DistributionMode::Remote(base) => {
                let mut url = base.clone();
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments
                        .pop_if_empty()
                        .push(&zip_file_name.name_with_extension());
                }
                Some(url)
            }
        }
    }
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionMode::Local => write!(f, "local"),
            DistributionMode::Remote(url) => write!(f, "remote ({})", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip(name: &str) -> ZipFileName {
        ZipFileName::of(name).unwrap()
    }

    #[test]
    fn test_default_is_local() {
        assert_eq!(DistributionMode::default(), DistributionMode::Local);
        assert!(DistributionMode::Local.distribution_url(&zip("Foo")).is_none());
    }

    #[test]
    fn test_remote_appends_zip_name() {
        let mode = DistributionMode::remote("https://example.com/files").unwrap();
        let url = mode.distribution_url(&zip("Foo")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/files/Foo.zip");
    }

    #[test]
    fn test_remote_with_trailing_slash() {
        let mode = DistributionMode::remote("https://example.com/files/").unwrap();
        let url = mode.distribution_url(&zip("Foo-1.0")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/files/Foo-1.0.zip");
    }

    #[test]
    fn test_remote_on_bare_host() {
        let mode = DistributionMode::remote("https://example.com").unwrap();
        let url = mode.distribution_url(&zip("Foo")).unwrap();
        assert_eq!(url.as_str(), "https://example.com/Foo.zip");
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        for raw in ["not a url", "", "example.com/files", "mailto:dev@example.com"] {
            assert_eq!(
                DistributionMode::remote(raw),
                Err(ConfigError::InvalidDistributionUrl(raw.to_string())),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_of_raw_values() {
        assert_eq!(DistributionMode::of(None, None), Ok(DistributionMode::Local));
        assert_eq!(
            DistributionMode::of(Some("LOCAL"), None),
            Ok(DistributionMode::Local)
        );
        assert!(matches!(
            DistributionMode::of(Some("remote"), Some("https://example.com")),
            Ok(DistributionMode::Remote(_))
        ));
        assert!(matches!(
            DistributionMode::of(None, Some("https://example.com")),
            Ok(DistributionMode::Remote(_))
        ));
        assert_eq!(
            DistributionMode::of(Some("remote"), None),
            Err(ConfigError::MissingRequiredValue("distribution.url".to_string()))
        );
        assert_eq!(
            DistributionMode::of(Some("cdn"), None),
            Err(ConfigError::InvalidDistributionMode("cdn".to_string()))
        );
    }

    #[test]
    fn test_local_mode_ignores_url() {
        assert_eq!(
            DistributionMode::of(Some("local"), Some("https://example.com/files")),
            Ok(DistributionMode::Local)
        );
        assert_eq!(
            DistributionMode::of(Some("local"), Some("::")),
            Ok(DistributionMode::Local)
        );
    }
}
