use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::deck::DeckKind;
use crate::draw::{DrawRequest, DrawnCard, Layout};
use crate::spread::Spread;

/// Identifier of a stored reading: its creation time in epoch milliseconds,
/// bumped when needed to stay unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingId(pub u64);

impl ReadingId {
    /// The id for a reading created at `timestamp`.
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self(u64::try_from(timestamp.timestamp_millis()).unwrap_or(0))
    }
}

impl std::fmt::Display for ReadingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReadingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A completed reading, as kept in history.
///
/// Field names follow the history/export JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Unique id within the store.
    pub id: ReadingId,
    /// Generator seed the reading was drawn with.
    pub seed: u64,
    /// Deck selection.
    #[serde(rename = "deckType", default)]
    pub deck: DeckKind,
    /// Spread key.
    #[serde(rename = "spreadType")]
    pub spread_key: String,
    /// Spread display name at the time of drawing.
    pub spread_name: String,
    /// The querent's question; empty when none was asked.
    #[serde(default)]
    pub question: String,
    /// Positional cards in spread order.
    pub drawn_cards: Vec<DrawnCard>,
    /// The extra bottom card.
    pub bottom_card: DrawnCard,
    /// Creation time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Marked as a favorite.
    #[serde(default)]
    pub favorite: bool,
    /// Distinct user tags.
    #[serde(default, deserialize_with = "distinct_tags")]
    pub tags: Vec<String>,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

fn distinct_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

impl Reading {
    /// Assemble a reading from a finished draw.
    pub fn new(
        request: &DrawRequest,
        spread: &Spread,
        layout: Layout,
        id: ReadingId,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            seed: request.seed,
            deck: request.deck,
            spread_key: spread.key.to_string(),
            spread_name: spread.name.to_string(),
            question: request.question.clone(),
            drawn_cards: layout.drawn,
            bottom_card: layout.bottom,
            timestamp,
            favorite: false,
            tags: Vec::new(),
            note: String::new(),
        }
    }

    /// The request that reproduces this reading.
    pub fn request(&self) -> DrawRequest {
        DrawRequest::new(self.seed, self.deck, self.spread_key.clone())
            .with_question(self.question.clone())
    }

    /// Positional cards followed by the bottom card.
    pub fn all_cards(&self) -> impl Iterator<Item = &DrawnCard> {
        self.drawn_cards
            .iter()
            .chain(std::iter::once(&self.bottom_card))
    }

    /// Number of cards including the bottom card.
    pub fn card_count(&self) -> usize {
        self.drawn_cards.len() + 1
    }

    /// Flip the favorite flag and return the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// Replace the note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Whether the reading carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag. Returns false if it was blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag. Returns false if it was not present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() < before
    }

    /// Add the tag if absent, remove it if present. Returns whether it is now set.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.remove_tag(tag) {
            false
        } else {
            self.add_tag(tag)
        }
    }
}
