//! Repetition, lists and keyed collections.

use std::collections::HashMap;

use indexmap::IndexMap;
use rand::Rng;

use crate::config::{Bounds, CollectionOptions};
use crate::generators::scalar::number;
use crate::generators::text::string;

/// Calls `factory` exactly `count` times and returns the results in call
/// order. [`DEFAULT_COUNT`](crate::config::DEFAULT_COUNT) is the conventional
/// size.
pub fn multiple<T>(count: usize, mut factory: impl FnMut() -> T) -> Vec<T> {
    (0..count).map(|_| factory()).collect()
}

/// `count` independent integers in the default `[1, 20]` range.
pub fn numbers(count: usize, rng: &mut impl Rng) -> Vec<i64> {
    multiple(count, || number(Bounds::default(), rng))
}

fn note_collisions(requested: usize, actual: usize) {
    if actual < requested {
        tracing::debug!(
            requested,
            actual,
            "Key collisions shrank generated map; widen length or charset"
        );
    }
}

/// Map of `options.count` random string keys to random string values.
///
/// Duplicate keys overwrite earlier entries, so a small keyspace yields
/// fewer than `count` entries.
pub fn string_map<R: Rng>(options: &CollectionOptions, rng: &mut R) -> HashMap<String, String> {
    generic_map(options, |rng: &mut R| string(&options.string, rng), rng)
}

/// Map of `options.count` random string keys to values from `value_gen`,
/// which is invoked once per generated entry.
pub fn generic_map<T, R: Rng>(
    options: &CollectionOptions,
    mut value_gen: impl FnMut(&mut R) -> T,
    rng: &mut R,
) -> HashMap<String, T> {
    let map: HashMap<String, T> = multiple(options.count, || {
        let key = string(&options.string, rng);
        (key, value_gen(rng))
    })
    .into_iter()
    .collect();

    note_collisions(options.count, map.len());
    map
}

/// Like [`generic_map`], but keeps entries in generation order.
pub fn generic_dictionary<T, R: Rng>(
    options: &CollectionOptions,
    mut value_gen: impl FnMut(&mut R) -> T,
    rng: &mut R,
) -> IndexMap<String, T> {
    let dictionary: IndexMap<String, T> = multiple(options.count, || {
        let key = string(&options.string, rng);
        (key, value_gen(rng))
    })
    .into_iter()
    .collect();

    note_collisions(options.count, dictionary.len());
    dictionary
}
