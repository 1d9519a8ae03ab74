//! Single-value classification
//!
//! Maps one (already coerced) SIC value to an industry code under a scheme.
//! Missing input stays missing; every present integer gets exactly one code.

use serde::Serialize;

use crate::error::{IndustryError, Result};
use crate::scheme::Scheme;

/// Industry code within a scheme, always in `1..=N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IndustryCode(u8);

impl IndustryCode {
    /// Raw code value
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based indicator position
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl From<IndustryCode> for i64 {
    fn from(code: IndustryCode) -> Self {
        Self::from(code.0)
    }
}

/// Classify a SIC value under `scheme`.
///
/// `None` in gives `None` out without touching the rules. Values outside the
/// nominal `0..=9999` range are not rejected; no rule claims them, so they
/// land on the catch-all code.
#[must_use]
pub fn classify(sic: Option<i64>, scheme: Scheme) -> Option<IndustryCode> {
    let sic = sic?;
    let code = scheme
        .rules()
        .first_match(sic)
        .unwrap_or_else(|| scheme.catch_all());
    Some(IndustryCode(code))
}

/// Short label for `code`, e.g. `BusEq`
pub fn name_of(code: u8, scheme: Scheme) -> Result<&'static str> {
    scheme
        .names()
        .get(code)
        .map(|entry| entry.label)
        .ok_or(IndustryError::CodeNotFound { scheme, code })
}

/// Long description for `code`
pub fn description_of(code: u8, scheme: Scheme) -> Result<&'static str> {
    scheme
        .names()
        .get(code)
        .map(|entry| entry.description)
        .ok_or(IndustryError::CodeNotFound { scheme, code })
}

/// Indicator column names `{prefix}1 ..= {prefix}N`, in order
#[must_use]
pub fn indicator_columns(prefix: &str, scheme: Scheme) -> Vec<String> {
    (1..=scheme.group_count())
        .map(|code| format!("{prefix}{code}"))
        .collect()
}

/// Per-record classification output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Scheme used
    pub scheme: Scheme,
    /// Assigned code, `None` when the SIC value was missing
    pub code: Option<IndustryCode>,
    /// Short label for `code`
    pub label: Option<&'static str>,
}

impl Classification {
    /// Classify `sic` and resolve its label
    #[must_use]
    pub fn of(sic: Option<i64>, scheme: Scheme) -> Self {
        let code = classify(sic, scheme);
        let label = code.and_then(|c| name_of(c.get(), scheme).ok());
        Self {
            scheme,
            code,
            label,
        }
    }

    /// One-hot indicators of length N.
    ///
    /// Exactly one 1 at position `code` when a code is present, all zeros
    /// otherwise.
    #[must_use]
    pub fn indicators(&self) -> Vec<u8> {
        let mut flags = vec![0; usize::from(self.scheme.group_count())];
        if let Some(code) = self.code {
            flags[code.index()] = 1;
        }
        flags
    }

    /// Indicator value for `code` (1-based); 0 for any other code
    #[must_use]
    pub fn indicator(&self, code: u8) -> u8 {
        u8::from(self.code.is_some_and(|c| c.get() == code))
    }
}
