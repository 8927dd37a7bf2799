//! Core types for tarot readings: the card catalog, spreads, and the seeded
//! shuffle/draw engine.
//!
//! Everything in this crate is pure. A [`Reading`] is fully determined by its
//! seed, deck selection and spread, which is what makes share links replayable.

/// Cards, suits, and the static 78-card catalog.
pub mod card;
/// Named sub-decks and card search.
pub mod deck;
/// Shuffle/draw engine and drawn-card types.
pub mod draw;
/// Error types used throughout the crate.
pub mod error;
/// Share link encoding and decoding.
pub mod link;
/// The persisted reading record.
pub mod reading;
/// Deterministic seeded random number generator.
pub mod rng;
/// Fisher-Yates shuffle.
pub mod shuffle;
/// Static spread catalog.
pub mod spread;

/// Re-export card types.
pub use card::{Card, Suit};
/// Re-export deck selection.
pub use deck::DeckKind;
/// Re-export draw types.
pub use draw::{BOTTOM_POSITION, DrawRequest, DrawnCard, Layout, Orientation, draw};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export share links.
pub use link::ShareLink;
/// Re-export the reading record.
pub use reading::{Reading, ReadingId};
/// Re-export the generator.
pub use rng::{Mulberry32, SEED_RANGE, UnitRng, random_seed};
/// Re-export the shuffle.
pub use shuffle::shuffle;
/// Re-export spreads.
pub use spread::Spread;
