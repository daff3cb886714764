//! Scalar builders: booleans, integers, floats and big integers.

use num_bigint::{BigInt, RandBigInt};
use rand::Rng;

use crate::config::Bounds;

/// Uniformly random `true` or `false`.
pub fn boolean(rng: &mut impl Rng) -> bool {
    rng.gen_bool(0.5)
}

/// Uniform integer in `[bounds.min, bounds.max]`.
///
/// # Panics
///
/// Panics if `bounds.min > bounds.max`.
pub fn number(bounds: Bounds<i64>, rng: &mut impl Rng) -> i64 {
    rng.gen_range(bounds.min..=bounds.max)
}

/// Uniform real number in `[bounds.min, bounds.max]`.
///
/// # Panics
///
/// Panics if `bounds.min > bounds.max` or either bound is not finite.
pub fn float(bounds: Bounds<f64>, rng: &mut impl Rng) -> f64 {
    rng.gen_range(bounds.min..=bounds.max)
}

/// Uniform big integer in `[bounds.min, bounds.max]`.
///
/// Sampling happens on the big integers themselves, so ranges wider than
/// `f64` can represent stay exact.
///
/// # Panics
///
/// Panics if `bounds.min > bounds.max`.
pub fn big_int(bounds: &Bounds<BigInt>, rng: &mut impl Rng) -> BigInt {
    let upper = &bounds.max + 1u32;
    rng.gen_bigint_range(&bounds.min, &upper)
}
