//! Vendor toolkit version triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version reported by the vendor toolkit (`TK_GetVersion`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToolkitVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ToolkitVersion {
    pub fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ToolkitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error parsing a `major.minor.patch` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid toolkit version {input:?}: expected major.minor.patch")]
pub struct ParseVersionError {
    pub input: String,
}

impl FromStr for ToolkitVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            input: s.to_string(),
        };

        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u16, ParseVersionError> {
            parts.next().ok_or_else(err)?.parse().map_err(|_| err())
        };
        let version = Self::new(next()?, next()?, next()?);

        if parts.next().is_some() {
            return Err(err());
        }
        Ok(version)
    }
}
