use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit, catalog};

/// Which slice of the catalog is used as the draw pool.
///
/// Unknown keys in persisted data deserialize as [`DeckKind::Full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    /// The 22 trumps.
    Major,
    /// The 56 suit cards.
    Minor,
    /// Pages, Knights, Queens and Kings (16).
    Court,
    /// Ace through Ten of each minor suit (40).
    Numbered,
    /// All 78 cards. Must stay last: it is the catch-all for unknown keys.
    #[default]
    #[serde(other)]
    Full,
}

impl DeckKind {
    /// All deck selections.
    pub const ALL: [Self; 5] = [
        Self::Full,
        Self::Major,
        Self::Minor,
        Self::Court,
        Self::Numbered,
    ];

    /// Parse a deck selection key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" | "all" => Some(Self::Full),
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "court" => Some(Self::Court),
            "numbered" | "pips" => Some(Self::Numbered),
            _ => None,
        }
    }

    /// The key used in links and persisted readings.
    pub fn key(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Court => "court",
            Self::Numbered => "numbered",
        }
    }

    /// Whether a catalog card belongs to this deck.
    pub fn contains(self, card: &Card) -> bool {
        match self {
            Self::Full => true,
            Self::Major => card.suit == Suit::MajorArcana,
            Self::Minor => card.suit != Suit::MajorArcana,
            Self::Court => card.is_court(),
            Self::Numbered => card.suit != Suit::MajorArcana && !card.is_court(),
        }
    }

    /// A fresh copy of this deck's cards, in catalog order.
    pub fn cards(self) -> Vec<Card> {
        catalog()
            .iter()
            .filter(|c| self.contains(c))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Search the catalog by localized or English name.
///
/// The localized name is matched as a substring; the English name
/// case-insensitively. An empty query returns the whole catalog.
pub fn search_cards(query: &str) -> Vec<&'static Card> {
    let query = query.trim();
    let lower = query.to_lowercase();
    catalog()
        .iter()
        .filter(|c| c.name.contains(query) || c.english_name.to_lowercase().contains(&lower))
        .collect()
}
