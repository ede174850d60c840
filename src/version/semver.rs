//! Release version values parsed from tag names

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::version::error::VersionParseError;

/// A parsed `major.minor.patch[-pre]` release version.
///
/// Precedence only looks at the numeric triple; the pre-release tag is kept
/// for filtering. Build metadata is accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    pub fn with_pre_release(mut self, tag: &str) -> Self {
        self.pre_release = (!tag.is_empty()).then(|| tag.to_string());
        self
    }

    /// Parse a strict `major.minor.patch[-pre][+build]` string.
    pub fn parse(version: &str) -> Result<Self, VersionParseError> {
        let parsed = Version::parse(version).map_err(|e| VersionParseError::new(version, e))?;
        Ok(Self::from(parsed))
    }

    /// Parse a release tag, stripping a single leading `v` first.
    ///
    /// - "v1.2.3" -> 1.2.3
    /// - "1.2.3-rc.1" -> 1.2.3-rc.1
    /// - "vv1.2.3" -> error
    pub fn parse_tag(tag: &str) -> Result<Self, VersionParseError> {
        if tag.is_empty() {
            return Err(VersionParseError::new(tag, "empty tag"));
        }
        let version = tag.strip_prefix('v').unwrap_or(tag);
        Self::parse(version)
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Ordering key: (major, minor, patch).
    pub fn precedence(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// True when both versions belong to the same minor line.
    pub fn same_minor_line(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl From<Version> for SemanticVersion {
    fn from(version: Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: (!version.pre.is_empty()).then(|| version.pre.to_string()),
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", SemanticVersion::new(1, 2, 3))]
    #[case("v1.2.3", SemanticVersion::new(1, 2, 3))]
    #[case("v3.0.0-beta.1", SemanticVersion::new(3, 0, 0).with_pre_release("beta.1"))]
    #[case("1.3.0-beta", SemanticVersion::new(1, 3, 0).with_pre_release("beta"))]
    #[case("v2.0.1+build.7", SemanticVersion::new(2, 0, 1))] // build metadata dropped
    fn parse_tag_accepts_valid_tags(#[case] tag: &str, #[case] expected: SemanticVersion) {
        assert_eq!(SemanticVersion::parse_tag(tag).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("v")]
    #[case("vv1.2.3")] // only one leading v is stripped
    #[case("1.2")]
    #[case("release-1.2.3")]
    #[case("latest")]
    fn parse_tag_rejects_malformed_tags(#[case] tag: &str) {
        assert!(SemanticVersion::parse_tag(tag).is_err());
    }

    #[test]
    fn parse_does_not_strip_v_prefix() {
        let err = SemanticVersion::parse("v1.0.0").unwrap_err();
        assert_eq!(err.input, "v1.0.0");
    }

    #[test]
    fn display_omits_pre_release_and_build() {
        let version = SemanticVersion::parse("1.3.0-beta+exp.sha.5114f85").unwrap();
        assert_eq!(version.to_string(), "1.3.0");
        assert!(version.is_pre_release());
    }

    #[test]
    fn precedence_ignores_pre_release() {
        let release = SemanticVersion::new(1, 3, 0);
        let beta = SemanticVersion::new(1, 3, 0).with_pre_release("beta");
        assert_eq!(release.precedence(), beta.precedence());
        assert_ne!(release, beta);
    }

    #[test]
    fn with_empty_pre_release_is_a_release() {
        assert!(!SemanticVersion::new(1, 0, 0).with_pre_release("").is_pre_release());
    }
}
