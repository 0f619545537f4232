// ─── PE Version ───
// Parses `MAJOR.MINOR.PATCH[+COMMIT-SNAPSHOT]` version strings.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{BuildError, BuildResult};

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A parsed library version.
///
/// Accepted grammar:
///   `MAJOR.MINOR.PATCH`
///   `MAJOR.MINOR.PATCH+COMMIT-SNAPSHOT`
///
/// where each numeric part is a run of ASCII digits and `COMMIT` is a run
/// of lowercase hex digits. Numeric parts must fit a Java `int`, since they
/// end up as int literals in generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Short commit id, present only for snapshot builds.
    pub snapshot_commit: Option<String>,
}

impl Version {
    /// Sentinel used when the running version cannot be determined.
    pub const UNKNOWN: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        snapshot_commit: None,
    };

    /// Parse a version string.
    ///
    /// # Examples
    /// ```
    /// use pe_build::Version;
    ///
    /// let v = Version::parse("2.5.1+a1b2c3d-SNAPSHOT").unwrap();
    /// assert_eq!((v.major, v.minor, v.patch), (2, 5, 1));
    /// assert_eq!(v.snapshot_commit.as_deref(), Some("a1b2c3d"));
    /// ```
    pub fn parse(raw: &str) -> BuildResult<Self> {
        let invalid = || BuildError::InvalidVersionFormat(raw.to_string());

        let (core, snapshot_commit) = match raw.split_once('+') {
            Some((core, suffix)) => {
                let commit = suffix.strip_suffix(SNAPSHOT_SUFFIX).ok_or_else(invalid)?;
                if commit.is_empty() || !commit.bytes().all(is_lower_hex) {
                    return Err(invalid());
                }
                (core, Some(commit.to_string()))
            }
            None => (raw, None),
        };

        let mut parts = core.split('.');
        let major = parse_component(parts.next()).ok_or_else(invalid)?;
        let minor = parse_component(parts.next()).ok_or_else(invalid)?;
        let patch = parse_component(parts.next()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
            snapshot_commit,
        })
    }

    pub fn is_snapshot(&self) -> bool {
        self.snapshot_commit.is_some()
    }

    /// The commit id as a Java expression: a quoted string or `null`.
    pub fn quoted_snapshot_commit(&self) -> String {
        match &self.snapshot_commit {
            Some(commit) => format!("\"{}\"", commit),
            None => "null".to_string(),
        }
    }
}

fn parse_component(part: Option<&str>) -> Option<u32> {
    let part = part?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // i32 range: Java int literal.
    part.parse::<i32>().ok().map(|n| n as u32)
}

fn is_lower_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}

impl FromStr for Version {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(commit) = &self.snapshot_commit {
            write!(f, "+{}{}", commit, SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_invalid(raw: &str) {
        match Version::parse(raw) {
            Err(BuildError::InvalidVersionFormat(s)) => assert_eq!(s, raw),
            other => panic!("expected InvalidVersionFormat for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn parse_release() {
        let v = Version::parse("2.5.0").unwrap();
        assert_eq!(v.major, 2);
        assert_eq!(v.minor, 5);
        assert_eq!(v.patch, 0);
        assert_eq!(v.snapshot_commit, None);
        assert!(!v.is_snapshot());
    }

    #[test]
    fn parse_snapshot() {
        let v = Version::parse("2.5.1+a1b2c3d-SNAPSHOT").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (2, 5, 1));
        assert_eq!(v.snapshot_commit.as_deref(), Some("a1b2c3d"));
        assert!(v.is_snapshot());
    }

    #[test]
    fn rejects_malformed_versions() {
        for raw in [
            "2.5",
            "2.5.x",
            "v2.5.0",
            "",
            "2.5.0.1",
            "2..0",
            "2.5.0+",
            "2.5.0+-SNAPSHOT",
            "2.5.0+abc",
            "2.5.0+ABC-SNAPSHOT",
            "2.5.0+xyz-SNAPSHOT",
            "2.5.0+abc-SNAPSHOT-SNAPSHOT",
            "2.5.0+abc+def-SNAPSHOT",
            "2.5.0-SNAPSHOT",
            " 2.5.0",
            "2.5.0\n",
            "+1.2.3",
            "-1.2.3",
        ] {
            assert_invalid(raw);
        }
    }

    #[test]
    fn rejects_components_outside_java_int() {
        assert_invalid("2147483648.0.0");
        let v = Version::parse("2147483647.0.0").unwrap();
        assert_eq!(v.major, 2_147_483_647);
    }

    #[test]
    fn leading_zeros_are_accepted() {
        let v = Version::parse("02.05.00").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (2, 5, 0));
    }

    #[test]
    fn quoted_commit() {
        assert_eq!(Version::parse("1.0.0").unwrap().quoted_snapshot_commit(), "null");
        assert_eq!(
            Version::parse("1.0.0+beef-SNAPSHOT")
                .unwrap()
                .quoted_snapshot_commit(),
            "\"beef\""
        );
    }

    #[test]
    fn unknown_sentinel() {
        assert_eq!(Version::UNKNOWN.to_string(), "0.0.0");
        assert!(!Version::UNKNOWN.is_snapshot());
    }

    #[test]
    fn from_str_matches_parse() {
        let v: Version = "3.1.4+0f-SNAPSHOT".parse().unwrap();
        assert_eq!(v, Version::parse("3.1.4+0f-SNAPSHOT").unwrap());
    }

    proptest! {
        #[test]
        fn valid_versions_parse_stably(
            major in 0u32..100_000,
            minor in 0u32..100_000,
            patch in 0u32..100_000,
            commit in proptest::option::of("[0-9a-f]{1,12}"),
        ) {
            let raw = match &commit {
                Some(c) => format!("{major}.{minor}.{patch}+{c}-SNAPSHOT"),
                None => format!("{major}.{minor}.{patch}"),
            };
            let first = Version::parse(&raw).unwrap();
            let second = Version::parse(&raw).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!((first.major, first.minor, first.patch), (major, minor, patch));
            prop_assert_eq!(first.snapshot_commit.clone(), commit);
            prop_assert_eq!(first.to_string(), raw);
        }

        #[test]
        fn arbitrary_input_never_panics(raw in "[0-9a-zA-Z.+-]{0,24}") {
            let _ = Version::parse(&raw);
        }
    }
}
