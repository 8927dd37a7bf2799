use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The five suits of a tarot deck. Major Arcana counts as its own suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// The 22 trump cards.
    #[serde(rename = "Major Arcana")]
    MajorArcana,
    /// Fire.
    Wands,
    /// Water.
    Cups,
    /// Air.
    Swords,
    /// Earth.
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Self; 5] = [
        Self::MajorArcana,
        Self::Wands,
        Self::Cups,
        Self::Swords,
        Self::Pentacles,
    ];

    /// The four minor suits in catalog order.
    pub const MINOR: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    /// English display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::MajorArcana => "Major Arcana",
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    fn localized_prefix(self) -> &'static str {
        match self {
            Self::MajorArcana => "",
            Self::Wands => "權杖",
            Self::Cups => "聖杯",
            Self::Swords => "寶劍",
            Self::Pentacles => "錢幣",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single card from the catalog.
///
/// Cards are immutable reference data; identity is the `key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Localized (Traditional Chinese) card name.
    pub name: String,
    /// The suit this card belongs to.
    pub suit: Suit,
    /// Rank label: a roman numeral for trumps, `Ace`..`Ten` or a court title.
    #[serde(rename = "number")]
    pub rank: String,
    /// Canonical English name.
    pub english_name: String,
    /// Stable snake_case identifier.
    #[serde(rename = "nameKey")]
    pub key: String,
}

/// Court titles, in rank order.
pub const COURT_RANKS: [&str; 4] = ["Page", "Knight", "Queen", "King"];

impl Card {
    /// Build a card from its parts.
    pub fn new(
        name: impl Into<String>,
        suit: Suit,
        rank: impl Into<String>,
        english_name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            suit,
            rank: rank.into(),
            english_name: english_name.into(),
            key: key.into(),
        }
    }

    /// Whether this is a Page, Knight, Queen or King.
    pub fn is_court(&self) -> bool {
        COURT_RANKS.contains(&self.rank.as_str())
    }

    /// Whether this card belongs to the Major Arcana.
    pub fn is_major(&self) -> bool {
        self.suit == Suit::MajorArcana
    }
}

/// Major Arcana: (localized name, rank, English name, key).
const MAJOR_ARCANA: [(&str, &str, &str, &str); 22] = [
    ("愚者", "0", "The Fool", "fool"),
    ("魔術師", "I", "The Magician", "magician"),
    ("女祭司", "II", "The High Priestess", "high_priestess"),
    ("皇后", "III", "The Empress", "empress"),
    ("皇帝", "IV", "The Emperor", "emperor"),
    ("教皇", "V", "The Hierophant", "hierophant"),
    ("戀人", "VI", "The Lovers", "lovers"),
    ("戰車", "VII", "The Chariot", "chariot"),
    ("力量", "VIII", "Strength", "strength"),
    ("隱士", "IX", "The Hermit", "hermit"),
    ("命運之輪", "X", "Wheel of Fortune", "wheel_of_fortune"),
    ("正義", "XI", "Justice", "justice"),
    ("倒吊人", "XII", "The Hanged Man", "hanged_man"),
    ("死神", "XIII", "Death", "death"),
    ("節制", "XIV", "Temperance", "temperance"),
    ("惡魔", "XV", "The Devil", "devil"),
    ("高塔", "XVI", "The Tower", "tower"),
    ("星星", "XVII", "The Star", "star"),
    ("月亮", "XVIII", "The Moon", "moon"),
    ("太陽", "XIX", "The Sun", "sun"),
    ("審判", "XX", "Judgement", "judgement"),
    ("世界", "XXI", "The World", "world"),
];

/// Minor ranks: (English rank, localized suffix).
const MINOR_RANKS: [(&str, &str); 14] = [
    ("Ace", "一"),
    ("Two", "二"),
    ("Three", "三"),
    ("Four", "四"),
    ("Five", "五"),
    ("Six", "六"),
    ("Seven", "七"),
    ("Eight", "八"),
    ("Nine", "九"),
    ("Ten", "十"),
    ("Page", "侍者"),
    ("Knight", "騎士"),
    ("Queen", "皇后"),
    ("King", "國王"),
];

static CATALOG: LazyLock<Vec<Card>> = LazyLock::new(|| {
    let mut cards = Vec::with_capacity(78);
    for (name, rank, english, key) in MAJOR_ARCANA {
        cards.push(Card::new(name, Suit::MajorArcana, rank, english, key));
    }
    for suit in Suit::MINOR {
        for (rank, suffix) in MINOR_RANKS {
            let english = format!("{rank} of {suit}");
            let key = english.to_lowercase().replace(' ', "_");
            cards.push(Card::new(
                format!("{}{suffix}", suit.localized_prefix()),
                suit,
                rank,
                english,
                key,
            ));
        }
    }
    cards
});

/// The full ordered 78-card catalog.
pub fn catalog() -> &'static [Card] {
    &CATALOG
}

/// Look up a catalog card by key.
pub fn find(key: &str) -> Option<&'static Card> {
    CATALOG.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_78_unique_cards() {
        let cards = catalog();
        assert_eq!(cards.len(), 78);
        let keys: HashSet<_> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), 78);
    }

    #[test]
    fn catalog_order() {
        let cards = catalog();
        assert_eq!(cards[0].key, "fool");
        assert_eq!(cards[21].key, "world");
        assert_eq!(cards[22].key, "ace_of_wands");
        assert_eq!(cards[22].name, "權杖一");
        assert_eq!(cards[77].key, "king_of_pentacles");
        assert_eq!(cards[77].name, "錢幣國王");
        assert_eq!(cards[77].english_name, "King of Pentacles");
    }

    #[test]
    fn court_detection() {
        assert!(find("queen_of_cups").unwrap().is_court());
        assert!(!find("ten_of_cups").unwrap().is_court());
        assert!(!find("empress").unwrap().is_court());
        assert!(find("empress").unwrap().is_major());
    }

    #[test]
    fn suit_counts() {
        for suit in Suit::MINOR {
            assert_eq!(catalog().iter().filter(|c| c.suit == suit).count(), 14);
        }
    }

    #[test]
    fn serde_uses_legacy_field_names() {
        let card = find("fool").unwrap();
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(json["suit"], "Major Arcana");
        assert_eq!(json["number"], "0");
        assert_eq!(json["englishName"], "The Fool");
        assert_eq!(json["nameKey"], "fool");
    }
}
