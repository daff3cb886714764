//! Value builders for test fixtures.
//!
//! Every builder takes its options first and the random source last:
//! - [`scalar`]: booleans, integers, floats, big integers
//! - [`text`]: strings and string lists over a [`Charset`]
//! - [`datetime`]: timestamp strings and parsed dates
//! - [`collections`]: repetition, maps and ordered dictionaries
//! - [`sample`]: uniform picks from existing collections

pub mod collections;
pub mod datetime;
pub mod sample;
pub mod scalar;
pub mod text;

pub use collections::{generic_dictionary, generic_map, multiple, numbers, string_map};
pub use datetime::{date, datetime};
pub use sample::{sample_many, sample_one};
pub use scalar::{big_int, boolean, float, number};
pub use text::{Charset, CustomCharset, string, strings};
