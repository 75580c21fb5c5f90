use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;

/// `major.minor.patch` with an optional `-pre` or `+build` tail.
const VERSION_PATTERN: &str = r"^([0-9]+)\.([0-9]+)\.([0-9]+)([-+][0-9A-Za-z.-]+)?$";

/// A validated version string, as written into the build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    /// Digit runs as typed; no upper bound, leading zeros kept
    pub major: String,
    pub minor: String,
    pub patch: String,
    /// Raw suffix including its leading `-` or `+`
    pub suffix: Option<String>,
    text: String,
}

impl VersionString {
    /// Parse user input (e.g., "v1.2.3" -> VersionString(1,2,3))
    ///
    /// A single leading `v` or `V` is dropped before matching. The error
    /// carries `raw` untouched so the caller can echo what the user typed.
    pub fn parse(raw: &str) -> Result<Self> {
        let stripped = raw.strip_prefix(|c: char| c == 'v' || c == 'V').unwrap_or(raw);

        let captures = Regex::new(VERSION_PATTERN)
            .ok()
            .and_then(|re| re.captures(stripped))
            .ok_or_else(|| BumpError::invalid_version(raw))?;

        let component = |index: usize| {
            captures
                .get(index)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Ok(VersionString {
            major: component(1),
            minor: component(2),
            patch: component(3),
            suffix: captures.get(4).map(|m| m.as_str().to_string()),
            text: stripped.to_string(),
        })
    }

    /// The version exactly as it will be written (prefix already stripped)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Strict SemVer view, if the text also satisfies SemVer 2.0 rules
    ///
    /// The accepted pattern is looser than SemVer (leading zeros, empty
    /// dot-separated identifiers), so this can be `None` for a valid input.
    pub fn to_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.text).ok()
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = VersionString::parse("1.2.3").unwrap();
        assert_eq!(v.major, "1");
        assert_eq!(v.minor, "2");
        assert_eq!(v.patch, "3");
        assert_eq!(v.suffix, None);
        assert_eq!(v.as_str(), "1.2.3");
    }

    #[test]
    fn test_version_parse_strips_prefix() {
        assert_eq!(VersionString::parse("v2.0.1").unwrap().as_str(), "2.0.1");
        assert_eq!(VersionString::parse("V2.0.1").unwrap().as_str(), "2.0.1");
    }

    #[test]
    fn test_version_parse_strips_only_one_prefix() {
        assert!(VersionString::parse("vv1.2.3").is_err());
        assert!(VersionString::parse("vV1.2.3").is_err());
    }

    #[test]
    fn test_version_parse_suffixes() {
        let pre = VersionString::parse("1.0.0-rc.1").unwrap();
        assert_eq!(pre.suffix.as_deref(), Some("-rc.1"));

        let build = VersionString::parse("v1.0.0+build-42").unwrap();
        assert_eq!(build.suffix.as_deref(), Some("+build-42"));
        assert_eq!(build.to_string(), "1.0.0+build-42");
    }

    #[test]
    fn test_version_parse_keeps_text_verbatim() {
        let v = VersionString::parse("01.002.3").unwrap();
        assert_eq!(v.major, "01");
        assert_eq!(v.minor, "002");
        assert_eq!(v.as_str(), "01.002.3");
    }

    #[test]
    fn test_version_parse_invalid() {
        for raw in [
            "",
            "v",
            "1.2",
            "1.2.3.4",
            "1.2.x",
            "not-a-version",
            "1.2.3-",
            "1.2.3_beta",
            " 1.2.3",
            "1.2.3 ",
            "x1.2.3",
            "1.2.3-beta!",
        ] {
            assert!(VersionString::parse(raw).is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_version_parse_error_echoes_raw() {
        let err = VersionString::parse("vnope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid version: vnope");
    }

    #[test]
    fn test_version_parse_accepts_huge_components() {
        let v = VersionString::parse("18446744073709551616.0.0").unwrap();
        assert_eq!(v.major, "18446744073709551616");
        assert_eq!(v.as_str(), "18446744073709551616.0.0");
    }

    #[test]
    fn test_to_semver() {
        let v = VersionString::parse("1.2.3-alpha.1").unwrap();
        assert_eq!(
            v.to_semver(),
            Some(semver::Version::parse("1.2.3-alpha.1").unwrap())
        );

        // Leading zeros pass the pattern but not SemVer
        assert_eq!(VersionString::parse("1.02.3").unwrap().to_semver(), None);
    }
}
