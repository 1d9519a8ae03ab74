//! Fama-French industry schemes
//!
//! Each scheme owns an independently transcribed rule table and name table.
//! Tables are compile-time constants; nothing here is loaded at runtime.

mod ff12;
mod ff38;
mod ff5;
pub mod names;
pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndustryError;
use names::NameTable;
use rules::RuleTable;

/// Supported industry groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Scheme {
    /// Fama-French 5 industries
    Ff5,
    /// Fama-French 12 industries
    Ff12,
    /// Fama-French 38 industries
    Ff38,
}

impl Scheme {
    /// All schemes, smallest first
    pub const ALL: [Self; 3] = [Self::Ff5, Self::Ff12, Self::Ff38];

    /// Number of industry groups N; codes run `1..=N`
    #[must_use]
    pub const fn group_count(self) -> u8 {
        match self {
            Self::Ff5 => 5,
            Self::Ff12 => 12,
            Self::Ff38 => 38,
        }
    }

    /// Code assigned by the catch-all rule (always N)
    #[must_use]
    pub const fn catch_all(self) -> u8 {
        self.group_count()
    }

    /// Ordered rule table for this scheme
    #[must_use]
    pub const fn rules(self) -> &'static RuleTable {
        match self {
            Self::Ff5 => &ff5::TABLE,
            Self::Ff12 => &ff12::TABLE,
            Self::Ff38 => &ff38::TABLE,
        }
    }

    /// Code to label table for this scheme
    #[must_use]
    pub const fn names(self) -> &'static NameTable {
        match self {
            Self::Ff5 => &ff5::NAME_TABLE,
            Self::Ff12 => &ff12::NAME_TABLE,
            Self::Ff38 => &ff38::NAME_TABLE,
        }
    }

    /// Run the construction-time self-check for this scheme
    pub fn verify(self) -> crate::Result<()> {
        self.rules().verify(self.names())
    }
}

impl TryFrom<u8> for Scheme {
    type Error = IndustryError;

    fn try_from(groups: u8) -> Result<Self, Self::Error> {
        match groups {
            5 => Ok(Self::Ff5),
            12 => Ok(Self::Ff12),
            38 => Ok(Self::Ff38),
            other => Err(IndustryError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl From<Scheme> for u8 {
    fn from(scheme: Scheme) -> Self {
        scheme.group_count()
    }
}

impl FromStr for Scheme {
    type Err = IndustryError;

    /// Accepts `"12"`, `"ff12"` or `"FF12"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("ff")
            .or_else(|| trimmed.strip_prefix("FF"))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .map_err(|_| IndustryError::UnsupportedScheme(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FF{}", self.group_count())
    }
}
