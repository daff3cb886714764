//! Option types for the builders and seeding configuration.

use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::generators::text::Charset;

/// Environment variable holding a fixed seed for reproducible runs.
pub const SEED_ENV_VAR: &str = "TEST_BUILDERS_SEED";

/// Entry count used by collection builders when the caller has no preference.
pub const DEFAULT_COUNT: usize = 3;

/// Inclusive bounds for numeric generation. Callers keep `min <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>, Bounds<T>: Default"))]
pub struct Bounds<T> {
    /// Smallest value that can be generated.
    pub min: T,
    /// Largest value that can be generated.
    pub max: T,
}

impl<T> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl Default for Bounds<i64> {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl Default for Bounds<f64> {
    fn default() -> Self {
        Self::new(1.0, 20.0)
    }
}

impl Default for Bounds<BigInt> {
    fn default() -> Self {
        Self::new(BigInt::from(1), BigInt::from(20))
    }
}

/// Casing applied to a string after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capitalization {
    Uppercase,
    Lowercase,
}

impl Capitalization {
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Uppercase => input.to_uppercase(),
            Self::Lowercase => input.to_lowercase(),
        }
    }
}

/// Shape of a generated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    /// Number of characters, before casing.
    pub length: usize,
    /// Characters to draw from. Defaults to ASCII letters.
    pub charset: Charset,
    /// `None` keeps the characters as drawn.
    pub capitalization: Option<Capitalization>,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            length: 6,
            charset: Charset::Alphabetic,
            capitalization: None,
        }
    }
}

impl StringOptions {
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = Some(capitalization);
        self
    }
}

/// Size and element shape of a generated map, dictionary or string list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionOptions {
    /// Requested entry count. Maps may end up smaller on key collisions.
    pub count: usize,
    /// Shape of every generated key or string.
    #[serde(flatten)]
    pub string: StringOptions,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            string: StringOptions::default(),
        }
    }
}

impl CollectionOptions {
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn string(mut self, string: StringOptions) -> Self {
        self.string = string;
        self
    }
}

/// Pieces of a timestamp. Absent parts are randomized by
/// [`datetime`](crate::generators::datetime::datetime); present ones are
/// used verbatim, so `month: Some("3")` stays unpadded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeParts {
    pub year: Option<i32>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hours: Option<String>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl DateTimeParts {
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    pub fn minutes(mut self, minutes: impl Into<String>) -> Self {
        self.minutes = Some(minutes.into());
        self
    }

    pub fn seconds(mut self, seconds: impl Into<String>) -> Self {
        self.seconds = Some(seconds.into());
        self
    }

    /// Fills every absent field from `fallback`. Present fields win.
    pub fn or(self, fallback: DateTimeParts) -> Self {
        Self {
            year: self.year.or(fallback.year),
            month: self.month.or(fallback.month),
            day: self.day.or(fallback.day),
            hours: self.hours.or(fallback.hours),
            minutes: self.minutes.or(fallback.minutes),
            seconds: self.seconds.or(fallback.seconds),
        }
    }
}

/// Controls where the random source comes from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Fixed seed for reproducible data. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SeedConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Reads the seed from `TEST_BUILDERS_SEED`.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(SEED_ENV_VAR).ok())
    }

    /// Parses a raw seed value, surrounding whitespace allowed. An
    /// unparsable value is ignored with a warning.
    pub fn from_value(raw: Option<String>) -> Self {
        let seed = raw.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("Ignoring {SEED_ENV_VAR}={raw:?}: {e}");
                None
            }
        });

        Self { seed }
    }

    /// Builds the random source described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                tracing::debug!("Seeding random source with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => {
                tracing::debug!("Seeding random source from entropy");
                StdRng::from_entropy()
            }
        }
    }
}
