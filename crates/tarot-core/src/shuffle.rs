use crate::rng::UnitRng;

/// Return a shuffled copy of `items` (Durstenfeld's Fisher-Yates).
///
/// Walks from the last index down to 1, swapping index `i` with
/// `floor(u * (i + 1))` for a fresh `u` each step. Consumes exactly
/// `len - 1` values (none for fewer than two items). The input is untouched.
pub fn shuffle<T: Clone, R: UnitRng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64).floor() as usize).min(i);
        out.swap(i, j);
    }
    out
}
