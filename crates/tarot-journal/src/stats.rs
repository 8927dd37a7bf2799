//! Aggregate statistics over the reading history.
//!
//! Frequency maps remember the order in which keys were first counted, and
//! top-N extraction breaks count ties by that order. Results are therefore
//! fully determined by the history order.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tarot_core::{Orientation, Reading};

/// How many entries the top-N lists show.
pub const TOP_N: usize = 5;

/// Counts per key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// The count for `key` (zero when never seen).
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// The `n` highest counts, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        // Stable sort keeps first-seen order among equal counts.
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Summary of the whole history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of readings.
    pub reading_count: usize,
    /// Cards drawn, bottom cards included.
    pub total_cards: usize,
    /// Upright cards.
    pub upright: usize,
    /// Reversed cards.
    pub reversed: usize,
    /// Readings marked favorite.
    pub favorite_count: usize,
    /// Appearances per card name.
    pub cards: FrequencyMap,
    /// Appearances per suit.
    pub suits: FrequencyMap,
    /// Readings per spread name.
    pub spreads: FrequencyMap,
}

impl Statistics {
    /// Compute statistics over `readings`.
    pub fn compute(readings: &[Reading]) -> Self {
        let mut stats = Self {
            reading_count: readings.len(),
            ..Self::default()
        };
        for reading in readings {
            if reading.favorite {
                stats.favorite_count += 1;
            }
            stats.spreads.increment(&reading.spread_name);
            for drawn in reading.all_cards() {
                stats.total_cards += 1;
                match drawn.orientation {
                    Orientation::Upright => stats.upright += 1,
                    Orientation::Reversed => stats.reversed += 1,
                }
                stats.cards.increment(&drawn.card.name);
                stats.suits.increment(drawn.card.suit.label());
            }
        }
        stats
    }

    /// Share of upright cards, 0 to 100. Zero when no cards were drawn.
    pub fn upright_percent(&self) -> f64 {
        percent(self.upright, self.total_cards)
    }

    /// Share of reversed cards, 0 to 100. Zero when no cards were drawn.
    pub fn reversed_percent(&self) -> f64 {
        percent(self.reversed, self.total_cards)
    }

    /// Mean cards per reading. Zero for an empty history.
    pub fn average_cards(&self) -> f64 {
        if self.reading_count == 0 {
            0.0
        } else {
            self.total_cards as f64 / self.reading_count as f64
        }
    }

    /// The most drawn cards.
    pub fn top_cards(&self) -> Vec<(&str, usize)> {
        self.cards.top(TOP_N)
    }

    /// The most used spreads.
    pub fn top_spreads(&self) -> Vec<(&str, usize)> {
        self.spreads.top(TOP_N)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
