use crate::error::{BumpVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Restricted to the `major.minor.patch` integer triple; pre-release and
/// build-metadata segments are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump version according to the requested level
    ///
    /// Lower components reset to zero: a minor bump resets patch, a major
    /// bump resets both minor and patch.
    pub fn bump(&self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpLevel::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpLevel::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Requested bump magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Resolve an optional CLI token into a bump level
    ///
    /// An omitted token defaults to `patch`; anything other than the three
    /// recognized levels is an `InvalidBumpLevel` error.
    pub fn resolve(token: Option<&str>) -> Result<Self> {
        match token {
            Some(token) => token.parse(),
            None => Ok(BumpLevel::Patch),
        }
    }
}

impl FromStr for BumpLevel {
    type Err = BumpVersionError;

    /// Parse a level token, case-insensitive and whitespace-trimmed
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "patch" => Ok(BumpLevel::Patch),
            "minor" => Ok(BumpLevel::Minor),
            "major" => Ok(BumpLevel::Major),
            other => Err(BumpVersionError::invalid_bump_level(other)),
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpLevel::Patch => write!(f, "patch"),
            BumpLevel::Minor => write!(f, "minor"),
            BumpLevel::Major => write!(f, "major"),
        }
    }
}
