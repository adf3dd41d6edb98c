//! Dotted numeric versions (`1.3`, `v1.4.2`, `1.5.0-beta1`).

use crate::error::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A `major.minor[.patch]` version.
///
/// Ordering and equality look only at the numeric triple, so `1.3` equals
/// `1.3.0` and pre-release/build tags never change the order. The number of
/// components written in the source is kept for display and for the `~>`
/// operator.
#[derive(Clone, Debug)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    components: u8,
    pre: Option<String>,
    build: Option<String>,
}

impl SemanticVersion {
    /// A fully specified `major.minor.patch` version.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            components: 3,
            pre: None,
            build: None,
        }
    }

    pub(crate) fn from_parts(major: u64, minor: u64, patch: u64, components: u8) -> Self {
        Self {
            components,
            ..Self::new(major, minor, patch)
        }
    }

    /// Parse `v?MAJOR.MINOR[.PATCH][-PRE][+BUILD]`; a missing patch is 0.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidVersion {
            input: input.to_string(),
        };

        let s = input.trim();
        let s = s.strip_prefix('v').unwrap_or(s);

        let (s, build) = match s.split_once('+') {
            Some((head, build)) if !build.is_empty() => (head, Some(build.to_string())),
            Some(_) => return Err(invalid()),
            None => (s, None),
        };
        let (numeric, pre) = match s.split_once('-') {
            Some((head, pre)) if !pre.is_empty() => (head, Some(pre.to_string())),
            Some(_) => return Err(invalid()),
            None => (s, None),
        };

        let mut parts = Vec::with_capacity(3);
        for part in numeric.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            parts.push(part.parse::<u64>().map_err(|_| invalid())?);
        }

        let (major, minor, patch) = match parts.as_slice() {
            [major, minor] => (*major, *minor, 0),
            [major, minor, patch] => (*major, *minor, *patch),
            _ => return Err(invalid()),
        };

        Ok(Self {
            major,
            minor,
            patch,
            components: parts.len() as u8,
            pre,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// How many numeric components were written (2 or 3).
    pub fn components(&self) -> u8 {
        self.components
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.components >= 3 {
            write!(f, ".{}", self.patch)?;
        }
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}
