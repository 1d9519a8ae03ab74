//! Ordered SIC range rules
//!
//! A rule table is a fixed, ordered list of rules. Classification walks the list
//! and returns the code of the first rule whose predicate matches; the last rule
//! of every table is a predicate-free catch-all.

use std::fmt;

use crate::error::{IndustryError, Result};
use crate::scheme::Scheme;
use crate::scheme::names::NameTable;

/// Smallest value checked by the exhaustive table scan
pub const SIC_MIN: i64 = 0;
/// Largest value checked by the exhaustive table scan
pub const SIC_MAX: i64 = 9999;

/// A closed interval of SIC codes, or a single code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SicSpan {
    /// `lo <= sic <= hi`
    Range(u16, u16),
    /// `sic == value`
    Exact(u16),
}

impl SicSpan {
    /// Lower bound of the span
    #[must_use]
    pub const fn lo(self) -> u16 {
        match self {
            Self::Range(lo, _) | Self::Exact(lo) => lo,
        }
    }

    /// Upper bound of the span
    #[must_use]
    pub const fn hi(self) -> u16 {
        match self {
            Self::Range(_, hi) | Self::Exact(hi) => hi,
        }
    }

    /// Check whether the span contains `sic`
    #[must_use]
    pub fn contains(self, sic: i64) -> bool {
        i64::from(self.lo()) <= sic && sic <= i64::from(self.hi())
    }
}

impl fmt::Display for SicSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(lo, hi) => write!(f, "{lo:04}-{hi:04}"),
            Self::Exact(v) => write!(f, "{v:04}"),
        }
    }
}

/// What a rule matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Union of spans
    Spans(&'static [SicSpan]),
    /// Matches every value (catch-all)
    Always,
}

impl Predicate {
    /// Check whether the predicate matches `sic`
    #[must_use]
    pub fn matches(self, sic: i64) -> bool {
        match self {
            Self::Spans(spans) => spans.iter().any(|span| span.contains(sic)),
            Self::Always => true,
        }
    }
}

/// A single (predicate, code) rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryRule {
    /// Industry code assigned when the predicate matches
    pub code: u8,
    /// Values this rule claims
    pub predicate: Predicate,
}

impl IndustryRule {
    /// Create a rule over a set of spans
    #[must_use]
    pub const fn spans(code: u8, spans: &'static [SicSpan]) -> Self {
        Self {
            code,
            predicate: Predicate::Spans(spans),
        }
    }

    /// Create the catch-all rule
    #[must_use]
    pub const fn catch_all(code: u8) -> Self {
        Self {
            code,
            predicate: Predicate::Always,
        }
    }
}

/// A value claimed by more than one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOverlap {
    /// The contested SIC value
    pub sic: i64,
    /// Code of the earlier rule, which wins
    pub winner: u8,
    /// Code of the later rule, which never sees this value
    pub shadowed: u8,
}

/// Ordered rule list for one scheme
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    scheme: Scheme,
    rules: &'static [IndustryRule],
}

impl RuleTable {
    /// Wrap a static rule list
    #[must_use]
    pub const fn new(scheme: Scheme, rules: &'static [IndustryRule]) -> Self {
        Self { scheme, rules }
    }

    /// Scheme the table belongs to
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Rules in priority order
    #[must_use]
    pub const fn rules(&self) -> &'static [IndustryRule] {
        self.rules
    }

    /// Return the code of the first rule matching `sic`.
    ///
    /// `None` only when the table lacks a catch-all, which `verify` rejects.
    #[must_use]
    pub fn first_match(&self, sic: i64) -> Option<u8> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(sic))
            .map(|rule| rule.code)
    }

    /// Every value in `[SIC_MIN, SIC_MAX]` that two or more span rules claim.
    ///
    /// Each contested value is reported once per later rule it is shadowed in.
    #[must_use]
    pub fn overlaps(&self) -> Vec<RuleOverlap> {
        let mut out = Vec::new();
        for sic in SIC_MIN..=SIC_MAX {
            let mut matching = self.rules.iter().filter(|rule| match rule.predicate {
                Predicate::Spans(_) => rule.predicate.matches(sic),
                Predicate::Always => false,
            });
            if let Some(winner) = matching.next() {
                out.extend(matching.map(|later| RuleOverlap {
                    sic,
                    winner: winner.code,
                    shadowed: later.code,
                }));
            }
        }
        out
    }

    /// Spans that can never decide a classification because every value
    /// they contain is claimed by an earlier rule.
    #[must_use]
    pub fn shadowed_spans(&self) -> Vec<(u8, SicSpan)> {
        let mut out = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            let Predicate::Spans(spans) = rule.predicate else {
                continue;
            };
            let earlier = &self.rules[..idx];
            for span in spans {
                let unreachable = (i64::from(span.lo())..=i64::from(span.hi()))
                    .all(|sic| earlier.iter().any(|r| r.predicate.matches(sic)));
                if unreachable {
                    out.push((rule.code, *span));
                }
            }
        }
        out
    }

    /// Construction-time self-check.
    ///
    /// Asserts the table has exactly N rules coded `1..=N` in order, that the
    /// last and only the last rule is the catch-all, that every span is well
    /// formed inside `[SIC_MIN, SIC_MAX]`, that an exhaustive scan of that
    /// domain always yields a code in `1..=N`, and that `names` covers the
    /// same key domain.
    pub fn verify(&self, names: &NameTable) -> Result<()> {
        let n = self.scheme.group_count();
        let fail = |reason: String| IndustryError::InvalidRuleTable {
            scheme: self.scheme,
            reason,
        };

        if self.rules.len() != usize::from(n) {
            return Err(fail(format!(
                "expected {n} rules, found {}",
                self.rules.len()
            )));
        }

        for (idx, rule) in self.rules.iter().enumerate() {
            let expected = u8::try_from(idx + 1).map_err(|_| fail("too many rules".into()))?;
            if rule.code != expected {
                return Err(fail(format!(
                    "rule at position {expected} has code {}",
                    rule.code
                )));
            }
            let is_last = expected == n;
            match rule.predicate {
                Predicate::Always if !is_last => {
                    return Err(fail(format!("catch-all at position {expected} is not last")));
                }
                Predicate::Spans(_) if is_last => {
                    return Err(fail("last rule is not a catch-all".into()));
                }
                Predicate::Spans(spans) => {
                    if spans.is_empty() {
                        return Err(fail(format!("rule {expected} has no spans")));
                    }
                    if let Some(bad) = spans.iter().find(|s| {
                        s.lo() > s.hi() || i64::from(s.hi()) > SIC_MAX
                    }) {
                        return Err(fail(format!("rule {expected} has malformed span {bad}")));
                    }
                }
                Predicate::Always => {}
            }
        }

        for sic in SIC_MIN..=SIC_MAX {
            match self.first_match(sic) {
                Some(code) if (1..=n).contains(&code) => {}
                Some(code) => return Err(fail(format!("SIC {sic} mapped to invalid code {code}"))),
                None => return Err(fail(format!("SIC {sic} is not classified"))),
            }
        }

        if names.len() != usize::from(n) {
            return Err(fail(format!(
                "name table has {} entries, expected {n}",
                names.len()
            )));
        }
        for code in 1..=n {
            if names.get(code).is_none() {
                return Err(fail(format!("no name for code {code}")));
            }
        }

        Ok(())
    }
}
