//! History filtering and tag listing.

use tarot_core::Reading;

/// Suggested tags offered to the user. Any non-empty tag is accepted.
pub const COMMON_TAGS: [&str; 8] = [
    "work",
    "love",
    "health",
    "finance",
    "study",
    "social",
    "spiritual",
    "decision",
];

/// A builder for filtering reading history.
///
/// Every criterion that is set must match; unset criteria match everything.
/// Results keep history order (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    spread: Option<String>,
    tag: Option<String>,
    favorites_only: bool,
    limit: Option<usize>,
}

impl HistoryFilter {
    /// A filter that matches every reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep readings of one spread, given by display name or key.
    pub fn spread(mut self, spread: impl Into<String>) -> Self {
        self.spread = Some(spread.into());
        self
    }

    /// Keep readings carrying `tag`.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into().trim().to_string());
        self
    }

    /// Keep only favorites.
    pub fn favorites_only(mut self, yes: bool) -> Self {
        self.favorites_only = yes;
        self
    }

    /// Return at most `n` readings.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.spread.is_none() && self.tag.is_none() && !self.favorites_only
    }

    /// Whether one reading passes the filter.
    pub fn matches(&self, reading: &Reading) -> bool {
        if let Some(spread) = &self.spread
            && reading.spread_name != *spread
            && !reading.spread_key.eq_ignore_ascii_case(spread)
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !reading.has_tag(tag)
        {
            return false;
        }
        !self.favorites_only || reading.favorite
    }

    /// Matching readings, in history order.
    pub fn apply<'a>(&self, readings: &'a [Reading]) -> Vec<&'a Reading> {
        readings
            .iter()
            .filter(|r| self.matches(r))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Distinct tags used across `readings`, in first-seen order.
pub fn all_tags(readings: &[Reading]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for tag in readings.iter().flat_map(|r| r.tags.iter()) {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    tags
}
