//! Uniform picks from existing collections.
//!
//! Both functions take any iterable: pass a slice for list elements or
//! `map.values()` for the values of a keyed collection.

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

/// One element chosen uniformly, or `None` for empty input.
pub fn sample_one<I: IntoIterator>(input: I, rng: &mut impl Rng) -> Option<I::Item> {
    input.into_iter().choose(rng)
}

/// `count` elements chosen without replacement, in random order.
///
/// Asking for more elements than the input holds returns all of them.
pub fn sample_many<I: IntoIterator>(input: I, count: usize, rng: &mut impl Rng) -> Vec<I::Item> {
    let mut picked = input.into_iter().choose_multiple(rng, count);
    picked.shuffle(rng);
    picked
}
