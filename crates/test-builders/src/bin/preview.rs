//! Prints one of each fixture as JSON
//!
//! Run with:
//! ```
//! TEST_BUILDERS_SEED=12345 cargo run -p test-builders --bin preview
//! ```

use serde_json::json;
use test_builders::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let mut rng = config.rng();

    let collection = CollectionOptions::default();
    let pool = strings(&collection, &mut rng);

    let preview = json!({
        "seed": config.seed,
        "boolean": boolean(&mut rng),
        "number": number(Bounds::default(), &mut rng),
        "float": float(Bounds::default(), &mut rng),
        "big_int": big_int(&Bounds::default(), &mut rng).to_string(),
        "string": string(&StringOptions::default(), &mut rng),
        "datetime": datetime(DateTimeParts::default(), &mut rng),
        "date": date(DateTimeParts::default(), &mut rng)?.to_string(),
        "numbers": numbers(DEFAULT_COUNT, &mut rng),
        "strings": &pool,
        "string_map": string_map(&collection, &mut rng),
        "generic_dictionary": generic_dictionary(&collection, boolean, &mut rng),
        "sample_one": sample_one(&pool, &mut rng),
        "sample_many": sample_many(&pool, 2, &mut rng),
    });

    tracing::info!("Generated preview fixtures");
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
