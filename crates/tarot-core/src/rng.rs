//! Seeded pseudo-random generator for reproducible readings.
//!
//! Readings are replayed from a seed carried in a share link, so the stream of
//! values must be identical on every platform and release. The algorithm is
//! Mulberry32: 32-bit state, one add and two multiply-xorshift rounds per
//! output.

use rand::{Rng, RngCore};

/// A source of floats in `[0, 1)`.
///
/// The shuffle and draw engine consume randomness only through this trait.
pub trait UnitRng {
    /// Next value in `[0, 1)`. Advances the generator by one step.
    fn next_unit(&mut self) -> f64;
}

/// Upper bound (exclusive) of seeds chosen by [`random_seed`].
pub const SEED_RANGE: u64 = 1_000_000_000;

/// A fresh seed in `[0, SEED_RANGE)` from thread-local entropy.
pub fn random_seed() -> u64 {
    rand::rng().random_range(0..SEED_RANGE)
}

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32: a 32-bit counter-based mixing generator.
///
/// Period is 2^32. The Nth output depends only on the seed and N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
    steps: u64,
}

impl Mulberry32 {
    /// Seed the generator. Only the low 32 bits of `seed` are used.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed as u32,
            steps: 0,
        }
    }

    /// How many outputs have been produced since seeding.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn step(&mut self) -> u32 {
        self.steps += 1;
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl UnitRng for Mulberry32 {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.step()) / TWO_POW_32
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
