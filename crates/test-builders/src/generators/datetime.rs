//! Timestamp strings and parsed dates.

use rand::Rng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::{Bounds, DateTimeParts};
use crate::error::BuilderError;
use crate::generators::scalar::number;

/// Fractional seconds stamped onto every generated timestamp.
const FRACTION: &str = "926536";

fn padded(min: i64, max: i64, rng: &mut impl Rng) -> String {
    format!("{:02}", number(Bounds::new(min, max), rng))
}

/// Random parts covering every field. Days stop at 28 so any month is valid.
fn random_parts(rng: &mut impl Rng) -> DateTimeParts {
    DateTimeParts {
        year: Some(number(Bounds::new(2000, 2020), rng) as i32),
        month: Some(padded(1, 12, rng)),
        day: Some(padded(1, 28, rng)),
        hours: Some(padded(0, 23, rng)),
        minutes: Some(padded(0, 59, rng)),
        seconds: Some(padded(0, 59, rng)),
    }
}

/// Builds a `YYYY-MM-DDTHH:mm:ss.926536Z` timestamp.
///
/// Parts present in `parts` are written verbatim; the rest are random.
pub fn datetime(parts: DateTimeParts, rng: &mut impl Rng) -> String {
    let DateTimeParts {
        year,
        month,
        day,
        hours,
        minutes,
        seconds,
    } = parts.or(random_parts(rng));

    // `or` against a fully populated fallback leaves nothing unset.
    format!(
        "{}-{}-{}T{}:{}:{}.{FRACTION}Z",
        year.unwrap_or_default(),
        month.unwrap_or_default(),
        day.unwrap_or_default(),
        hours.unwrap_or_default(),
        minutes.unwrap_or_default(),
        seconds.unwrap_or_default(),
    )
}

/// Parses [`datetime`] output into a UTC date.
pub fn date(parts: DateTimeParts, rng: &mut impl Rng) -> Result<OffsetDateTime, BuilderError> {
    let value = datetime(parts, rng);
    OffsetDateTime::parse(&value, &Rfc3339)
        .map_err(|source| BuilderError::InvalidDate { value, source })
}
