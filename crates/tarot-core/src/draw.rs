//! The shuffle/draw engine.
//!
//! Randomness is consumed in a fixed order: the whole deck is shuffled first
//! (`deck - 1` values), then one value per position in spread order decides
//! that card's orientation, then one more for the bottom card. A draw therefore
//! always takes `(deck - 1) + (positions + 1)` values, and the same seed, deck
//! and spread always produce the same layout.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::DeckKind;
use crate::error::{CoreError, CoreResult};
use crate::rng::{Mulberry32, UnitRng};
use crate::shuffle::shuffle;
use crate::spread::{self, Spread};

/// Position label given to the bottom card.
pub const BOTTOM_POSITION: &str = "Bottom";

/// Whether a drawn card lies upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Upright.
    #[serde(alias = "正位")]
    Upright,
    /// Reversed.
    #[serde(alias = "逆位")]
    Reversed,
}

impl Orientation {
    /// Upright when `value > 0.5`, reversed otherwise.
    pub fn from_unit(value: f64) -> Self {
        if value > 0.5 {
            Self::Upright
        } else {
            Self::Reversed
        }
    }

    /// Draw an orientation from the generator (one step).
    pub fn roll<R: UnitRng + ?Sized>(rng: &mut R) -> Self {
        Self::from_unit(rng.next_unit())
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card placed in a reading: catalog data plus position and orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The catalog card.
    #[serde(flatten)]
    pub card: Card,
    /// Position label from the spread, or [`BOTTOM_POSITION`].
    pub position: String,
    /// Assigned orientation.
    pub orientation: Orientation,
}

/// The cards produced by one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// One card per spread position, in spread order.
    pub drawn: Vec<DrawnCard>,
    /// The extra card taken from the far end of the shuffled deck.
    pub bottom: DrawnCard,
}

impl Layout {
    /// Positional cards followed by the bottom card.
    pub fn all_cards(&self) -> impl Iterator<Item = &DrawnCard> {
        self.drawn.iter().chain(std::iter::once(&self.bottom))
    }
}

/// Draw a layout for `spread` from `deck`, seeded by `seed`.
pub fn draw(deck: &[Card], spread: &Spread, seed: u64) -> CoreResult<Layout> {
    let mut rng = Mulberry32::new(seed);
    draw_with(deck, spread, &mut rng)
}

/// Draw using a caller-supplied generator.
///
/// The deck size is checked before any value is taken from `rng`.
pub fn draw_with<R: UnitRng + ?Sized>(
    deck: &[Card],
    spread: &Spread,
    rng: &mut R,
) -> CoreResult<Layout> {
    let required = spread.required_cards();
    if deck.len() < required {
        return Err(CoreError::InsufficientDeckSize {
            deck: deck.len(),
            required,
        });
    }

    let shuffled = shuffle(deck, &mut *rng);

    let drawn = spread
        .positions
        .iter()
        .zip(&shuffled)
        .map(|(position, card)| DrawnCard {
            card: card.clone(),
            position: (*position).to_string(),
            orientation: Orientation::roll(&mut *rng),
        })
        .collect();

    // Always the last card, not the next one after the positions.
    let bottom = DrawnCard {
        card: shuffled[shuffled.len() - 1].clone(),
        position: BOTTOM_POSITION.to_string(),
        orientation: Orientation::roll(&mut *rng),
    };

    log::debug!(
        "drew {} cards for spread '{}' from a {}-card deck",
        spread.len() + 1,
        spread.key,
        deck.len()
    );

    Ok(Layout { drawn, bottom })
}

/// Everything needed to reproduce a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    /// Generator seed.
    pub seed: u64,
    /// Deck selection.
    pub deck: DeckKind,
    /// Spread key.
    pub spread: String,
    /// The querent's question, possibly empty.
    pub question: String,
}

impl DrawRequest {
    /// A request with an empty question.
    pub fn new(seed: u64, deck: DeckKind, spread: impl Into<String>) -> Self {
        Self {
            seed,
            deck,
            spread: spread.into(),
            question: String::new(),
        }
    }

    /// Set the question (trimmed).
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into().trim().to_string();
        self
    }

    /// Resolve the spread and perform the draw.
    pub fn execute(&self) -> CoreResult<(&'static Spread, Layout)> {
        let spread = spread::get(&self.spread)?;
        let layout = draw(&self.deck.cards(), spread, self.seed)?;
        Ok((spread, layout))
    }
}
