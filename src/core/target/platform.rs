//! Platform declarations.
//!
//! A declaration either names a whole family ("iOS from version 13") or a
//! list of individual slices. Each declaration is validated on its own and
//! contributes either one [`TargetPlatform`] or its errors; the declarations
//! are then combined so that every failure is reported together.

use serde::Serialize;

use crate::core::error::ConfigError;
use crate::core::names::PlatformVersion;
use crate::core::validated;

use super::apple::AppleTarget;
use super::name::{PlatformFamily, TargetName};

/// Result of validating one platform declaration.
pub type Declaration = Result<TargetPlatform, Vec<ConfigError>>;

/// A non-empty set of slices sharing one minimum OS version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPlatform {
    targets: Vec<TargetName>,
    version: PlatformVersion,
}

impl TargetPlatform {
    /// All slices of `family`.
    pub fn family(family: PlatformFamily, version: PlatformVersion) -> Self {
        TargetPlatform {
            targets: family.targets().to_vec(),
            version,
        }
    }

    /// A single slice.
    pub fn single(target: TargetName, version: PlatformVersion) -> Self {
        TargetPlatform {
            targets: vec![target],
            version,
        }
    }

    pub fn targets(&self) -> &[TargetName] {
        &self.targets
    }

    pub fn version(&self) -> &PlatformVersion {
        &self.version
    }

    pub fn contains(&self, target: TargetName) -> bool {
        self.targets.contains(&target)
    }

    /// Families covered by this platform, in slice order, without repeats.
    pub fn families(&self) -> Vec<PlatformFamily> {
        let mut families = Vec::new();
        for target in &self.targets {
            let family = target.family();
            if !families.contains(&family) {
                families.push(family);
            }
        }
        families
    }

    pub fn apple_targets(&self) -> Vec<AppleTarget> {
        self.targets
            .iter()
            .map(|t| AppleTarget::new(*t, self.version.clone()))
            .collect()
    }
}

/// Ordered list of platform declarations.
///
/// ```
/// use swiftpack::core::target::TargetPlatforms;
///
/// let platforms = TargetPlatforms::new()
///     .ios("13")
///     .targets(["macosArm64", "bogus"], "11");
/// let (valid, errors) = platforms.partition();
/// assert_eq!(valid.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TargetPlatforms {
    declarations: Vec<Declaration>,
}

impl TargetPlatforms {
    pub fn new() -> Self {
        TargetPlatforms::default()
    }

    /// Declare every iOS slice.
    pub fn ios(self, version: &str) -> Self {
        self.family(PlatformFamily::Ios, version)
    }

    /// Declare every watchOS slice.
    pub fn watchos(self, version: &str) -> Self {
        self.family(PlatformFamily::WatchOs, version)
    }

    /// Declare every tvOS slice.
    pub fn tvos(self, version: &str) -> Self {
        self.family(PlatformFamily::TvOs, version)
    }

    /// Declare every macOS slice.
    pub fn macos(self, version: &str) -> Self {
        self.family(PlatformFamily::MacOs, version)
    }

    /// Declare every slice of `family`.
    ///
    /// Only the version can be invalid; in that case the declaration
    /// contributes a single error and no platform.
    pub fn family(mut self, family: PlatformFamily, version: &str) -> Self {
        let declaration = PlatformVersion::of(version)
            .map(|v| TargetPlatform::family(family, v))
            .map_err(|e| vec![e]);
        self.declarations.push(declaration);
        self
    }

    /// Declare individual slices by name.
    ///
    /// Each name is its own declaration: an unknown name produces one
    /// error without affecting its neighbours. No names, no declarations.
    pub fn targets<I, S>(mut self, names: I, version: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<Result<TargetName, ConfigError>> = names
            .into_iter()
            .map(|n| TargetName::of(n.as_ref()))
            .collect();
        if names.is_empty() {
            return self;
        }

        match PlatformVersion::of(version) {
            Ok(version) => {
                for name in names {
                    let declaration = name
                        .map(|t| TargetPlatform::single(t, version.clone()))
                        .map_err(|e| vec![e]);
                    self.declarations.push(declaration);
                }
            }
            Err(version_error) => {
                let mut errors = vec![version_error];
                errors.extend(names.into_iter().filter_map(Result::err));
                self.declarations.push(Err(errors));
            }
        }
        self
    }

    /// Record a declaration that failed before reaching a builder.
    pub fn reject(mut self, errors: Vec<ConfigError>) -> Self {
        self.declarations.push(Err(errors));
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// All platforms, or every error from every declaration.
    pub fn resolve(self) -> Result<Vec<TargetPlatform>, Vec<ConfigError>> {
        validated::accumulate_all(self.declarations)
    }

    /// Valid platforms and all errors, side by side.
    pub fn partition(self) -> (Vec<TargetPlatform>, Vec<ConfigError>) {
        validated::partition(self.declarations)
    }
}

/// Every slice across `platforms`, first declaration wins on repeats.
pub fn apple_targets(platforms: &[TargetPlatform]) -> Vec<AppleTarget> {
    let mut targets: Vec<AppleTarget> = Vec::new();
    for target in platforms.iter().flat_map(TargetPlatform::apple_targets) {
        if !targets.iter().any(|t| t.name == target.name) {
            targets.push(target);
        }
    }
    targets
}

/// Render the `platforms:` list of `Package.swift`, e.g. `.iOS(.v13), .macOS(.v11)`.
///
/// SwiftPM accepts one entry per family, so the first declaration of a
/// family decides its minimum version.
pub fn render_platforms(platforms: &[TargetPlatform]) -> String {
    let mut seen: Vec<PlatformFamily> = Vec::new();
    let mut entries: Vec<String> = Vec::new();
    for platform in platforms {
        for family in platform.families() {
            if seen.contains(&family) {
                continue;
            }
            seen.push(family);
            entries.push(format!(
                ".{}({})",
                family.swift_name(),
                platform.version().swift_literal()
            ));
        }
    }
    entries.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn platforms_with(target: TargetName, platforms: &TargetPlatforms) -> bool {
        platforms
            .declarations()
            .iter()
            .filter_map(|d| d.as_ref().ok())
            .any(|p| p.contains(target))
    }

    #[test]
    fn test_ios_adds_every_ios_slice() {
        let platforms = TargetPlatforms::new().ios("13");
        for target in ["iosArm64", "iosX64", "iosSimulatorArm64"] {
            assert!(platforms_with(TargetName::of(target).unwrap(), &platforms));
        }
    }

    #[test]
    fn test_watchos_adds_every_watchos_slice() {
        let platforms = TargetPlatforms::new().watchos("6");
        for target in [
            "watchosArm32",
            "watchosArm64",
            "watchosDeviceArm64",
            "watchosSimulatorArm64",
        ] {
            assert!(platforms_with(TargetName::of(target).unwrap(), &platforms));
        }
    }

    #[test]
    fn test_tvos_adds_every_tvos_slice() {
        let platforms = TargetPlatforms::new().tvos("13");
        for target in ["tvosArm64", "tvosX64", "tvosSimulatorArm64"] {
            assert!(platforms_with(TargetName::of(target).unwrap(), &platforms));
        }
    }

    #[test]
    fn test_macos_adds_every_macos_slice() {
        let platforms = TargetPlatforms::new().macos("10.15");
        for target in ["macosX64", "macosArm64"] {
            assert!(platforms_with(TargetName::of(target).unwrap(), &platforms));
        }
    }

    #[test]
    fn test_family_with_invalid_version_is_dropped_with_one_error() {
        let (valid, errors) = TargetPlatforms::new().ios("").macos("11").partition();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].targets(), PlatformFamily::MacOs.targets());
        assert_eq!(errors, vec![ConfigError::InvalidPlatformVersion(String::new())]);
    }

    #[test]
    fn test_targets_without_names_adds_nothing() {
        let platforms = TargetPlatforms::new().targets(Vec::<String>::new(), "13");
        assert!(platforms.is_empty());
        assert_eq!(platforms.resolve(), Ok(vec![]));
    }

    #[test]
    fn test_targets_with_empty_name_adds_invalid_name_error() {
        let result = TargetPlatforms::new().targets([""], "13").resolve();
        assert_eq!(result, Err(vec![ConfigError::InvalidTargetName(String::new())]));
    }

    #[test]
    fn test_targets_with_invalid_version_adds_no_platform() {
        let (valid, errors) = TargetPlatforms::new()
            .targets(["iosArm64", "target"], "")
            .partition();
        assert!(valid.is_empty());
        assert_eq!(
            errors,
            vec![
                ConfigError::InvalidPlatformVersion(String::new()),
                ConfigError::InvalidTargetName("target".to_string()),
            ]
        );
    }

    #[test]
    fn test_one_bad_name_among_five_keeps_the_other_four() {
        let (valid, errors) = TargetPlatforms::new()
            .targets(
                ["iosArm64", "iosX64", "nope", "macosX64", "macosArm64"],
                "13",
            )
            .partition();
        assert_eq!(valid.len(), 4);
        assert_eq!(errors, vec![ConfigError::InvalidTargetName("nope".to_string())]);
    }

    #[test]
    fn test_errors_follow_declaration_order() {
        let result = TargetPlatforms::new()
            .targets(["first"], "13")
            .watchos("x")
            .targets(["second"], "13")
            .resolve();
        assert_eq!(
            result,
            Err(vec![
                ConfigError::InvalidTargetName("first".to_string()),
                ConfigError::InvalidPlatformVersion("x".to_string()),
                ConfigError::InvalidTargetName("second".to_string()),
            ])
        );
    }

    #[test]
    fn test_render_platforms_first_family_wins() {
        let platforms = TargetPlatforms::new()
            .ios("13")
            .targets(["iosArm64", "macosArm64"], "14")
            .watchos("6.2")
            .resolve()
            .unwrap();
        assert_eq!(
            render_platforms(&platforms),
            ".iOS(.v13), .macOS(.v14), .watchOS(.v6_2)"
        );
    }

    #[test]
    fn test_render_platforms_empty() {
        assert_eq!(render_platforms(&[]), "");
    }

    #[test]
    fn test_apple_targets_are_distinct_in_order() {
        let platforms = TargetPlatforms::new()
            .targets(["macosArm64"], "11")
            .macos("10.15")
            .resolve()
            .unwrap();
        let targets = apple_targets(&platforms);
        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["macosArm64", "macosX64"]);
        assert_eq!(targets[0].min_version.as_str(), "11");
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(TargetName::ALL.to_vec()).prop_map(|t| t.as_str().to_string()),
            "[a-z]{0,6}X?".prop_filter("not a target", |s| TargetName::of(s).is_err()),
        ]
    }

    proptest! {
        #[test]
        fn prop_k_invalid_names_yield_k_errors(
            names in proptest::collection::vec(name_strategy(), 0..16)
        ) {
            let invalid: Vec<ConfigError> = names
                .iter()
                .filter(|n| TargetName::of(n).is_err())
                .map(|n| ConfigError::InvalidTargetName(n.clone()))
                .collect();
            let expected_valid = names.len() - invalid.len();

            let (valid, errors) = TargetPlatforms::new().targets(&names, "13").partition();
            prop_assert_eq!(valid.len(), expected_valid);
            prop_assert_eq!(errors, invalid);
        }
    }
}
