//! Randomized fixture builders for test suites.
//!
//! This crate provides free functions that generate numbers, strings, dates,
//! booleans, maps, dictionaries, lists and samples. Each builder takes the
//! random source explicitly, so a seeded [`StdRng`](rand::rngs::StdRng) gives
//! reproducible fixtures and `rand::thread_rng()` gives fresh ones.
//!
//! # Quick Start
//!
//! ```rust
//! use test_builders::prelude::*;
//!
//! let mut rng = SeedConfig::with_seed(12345).rng();
//!
//! let id = number(Bounds::new(100, 999), &mut rng);
//! let name = string(
//!     &StringOptions::default().capitalization(Capitalization::Uppercase),
//!     &mut rng,
//! );
//! let created_at = datetime(DateTimeParts::default().year(2024), &mut rng);
//! let tags = strings(&CollectionOptions::default().count(4), &mut rng);
//! let scores = generic_map(
//!     &CollectionOptions::default(),
//!     |rng| float(Bounds::default(), rng),
//!     &mut rng,
//! );
//!
//! assert!((100..=999).contains(&id));
//! assert_eq!(name, name.to_uppercase());
//! assert!(created_at.starts_with("2024-"));
//! assert_eq!(tags.len(), 4);
//! assert_eq!(scores.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        Bounds, Capitalization, CollectionOptions, DEFAULT_COUNT, DateTimeParts, SeedConfig,
        StringOptions,
    };
    pub use crate::error::BuilderError;
    pub use crate::generators::{
        Charset, big_int, boolean, date, datetime, float, generic_dictionary, generic_map,
        multiple, number, numbers, sample_many, sample_one, string, string_map, strings,
    };
}
