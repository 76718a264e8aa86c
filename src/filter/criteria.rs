use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A normalized keyword substring query.
/// Normalization rules:
/// - Split on commas
/// - Trim each term, lowercase
/// - Drop empty terms (a blank query matches everything)
///
/// The wire form is the raw text; deserialization re-normalizes, so a
/// criteria snapshot can never smuggle in unnormalized terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct KeywordQuery {
    pub raw: String,
    pub terms: Vec<String>,
}

impl From<String> for KeywordQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<KeywordQuery> for String {
    fn from(query: KeywordQuery) -> String {
        query.raw
    }
}

impl KeywordQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = raw
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        Self { raw, terms }
    }

    /// OR across terms, case-insensitive substring match. Vacuously true
    /// when no terms remain after normalization.
    pub fn matches(&self, keyword: &str) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let keyword = keyword.to_lowercase();
        self.terms.iter().any(|term| keyword.contains(term.as_str()))
    }
}

/// Inclusive rank range for the competitor clause.
///
/// Interactive input is normalized rather than rejected: inverted bounds are
/// swapped and the lower bound is clamped to 1. Deserialization goes through
/// the same constructor, so snapshots normalize too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RankBounds")]
pub struct RankRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RankBounds {
    min: u32,
    max: u32,
}

impl From<RankBounds> for RankRange {
    fn from(bounds: RankBounds) -> Self {
        RankRange::new(bounds.min, bounds.max)
    }
}

impl RankRange {
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min: min.max(1), max: max.max(1) }
    }

    /// The full rank span; with no competitor allow-set this leaves the
    /// competitor clause unrestricted.
    pub fn unbounded() -> Self {
        Self { min: 1, max: u32::MAX }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, rank: u32) -> bool {
        rank >= self.min && rank <= self.max
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == Self::unbounded()
    }
}

impl Default for RankRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The full set of filter parameters, as a value object.
///
/// Every predicate is independent; a record passes iff all of them pass.
/// Empty allow-sets mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub categories: BTreeSet<String>,
    pub min_volume: u64,
    pub branded_only: bool,
    pub keyword_query: KeywordQuery,
    pub competitors: BTreeSet<String>,
    pub rank_range: RankRange,
}

impl FilterCriteria {
    /// True when both competitor predicates are at their unrestricted
    /// defaults, in which case the competitor clause passes even for a
    /// record with no competitor entries.
    pub fn competitor_clause_unrestricted(&self) -> bool {
        self.competitors.is_empty() && self.rank_range.is_unrestricted()
    }
}

/// Normalize a minimum-volume text input. Non-numeric input falls back to 0,
/// which matches everything; the engine never raises for bad interactive
/// input.
pub fn parse_min_volume(input: &str) -> u64 {
    input.trim().parse().unwrap_or(0)
}
