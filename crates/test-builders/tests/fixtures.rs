//! End-to-end checks of the public builder API.

use std::collections::HashSet;

use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;
use test_builders::prelude::*;

#[test]
fn test_datetime_matches_timestamp_format() {
    let mut rng = rand::thread_rng();
    let any = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{6}Z$").unwrap();
    let fixed_year = Regex::new(r"^2024-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{6}Z$").unwrap();

    for _ in 0..20 {
        assert!(any.is_match(&datetime(DateTimeParts::default(), &mut rng)));
        assert!(fixed_year.is_match(&datetime(DateTimeParts::default().year(2024), &mut rng)));
    }
}

#[test]
fn test_date_reflects_supplied_parts() {
    let mut rng = rand::thread_rng();
    let value = date(
        DateTimeParts::default().year(2024).month("01").day("15"),
        &mut rng,
    )
    .unwrap();

    assert_eq!(value.year(), 2024);
}

#[test]
fn test_numbers_stay_in_bounds_and_vary() {
    let mut rng = rand::thread_rng();

    let ints: HashSet<i64> = (0..20)
        .map(|_| number(Bounds::default(), &mut rng))
        .collect();
    assert!(ints.iter().all(|v| (1..=20).contains(v)));
    assert!(ints.len() > 1);

    let floats: Vec<f64> = (0..20)
        .map(|_| float(Bounds::new(5.0, 10.0), &mut rng))
        .collect();
    assert!(floats.iter().all(|v| (5.0..=10.0).contains(v)));
    assert!(floats.iter().any(|v| v.fract() != 0.0));

    let bounds = Bounds::new(BigInt::from(100), BigInt::from(200));
    for _ in 0..20 {
        let value = big_int(&bounds, &mut rng);
        assert!(value >= bounds.min && value <= bounds.max);
    }
}

#[test]
fn test_boolean_produces_both_values() {
    let mut rng = rand::thread_rng();
    let values: HashSet<bool> = (0..64).map(|_| boolean(&mut rng)).collect();
    assert!(values.contains(&true));
    assert!(values.contains(&false));
}

#[test]
fn test_strings_honor_length_and_casing() {
    let mut rng = rand::thread_rng();

    let value = string(&StringOptions::default().length(20), &mut rng);
    assert_eq!(value.chars().count(), 20);
    assert!(value.chars().all(|c| c.is_ascii_alphabetic()));

    let upper = strings(
        &CollectionOptions::default().string(
            StringOptions::default().capitalization(Capitalization::Uppercase),
        ),
        &mut rng,
    );
    assert_eq!(upper.len(), 3);
    assert!(upper.iter().all(|s| *s == s.to_uppercase()));
}

#[test]
fn test_maps_default_to_three_entries() {
    let mut rng = StdRng::seed_from_u64(2024);
    let defaults = CollectionOptions::default();

    assert_eq!(string_map(&defaults, &mut rng).len(), 3);
    assert_eq!(generic_map(&defaults, |_| 42, &mut rng).len(), 3);
    assert_eq!(generic_dictionary(&defaults, |_| 42, &mut rng).len(), 3);

    let dictionary = generic_dictionary(&defaults.clone().count(2), |_| "test-value", &mut rng);
    assert_eq!(dictionary.len(), 2);
    assert!(dictionary.values().all(|v| *v == "test-value"));
}

#[test]
fn test_generic_map_keys_are_unique() {
    let mut rng = rand::thread_rng();
    let map = generic_map(&CollectionOptions::default().count(5), |_| 1, &mut rng);
    let keys: HashSet<&String> = map.keys().collect();
    assert_eq!(keys.len(), map.len());
    assert_eq!(map.len(), 5);
}

#[test]
fn test_multiple_preserves_invocation_order() {
    let mut counter = 0;
    let values = multiple(5, || {
        counter += 1;
        counter
    });
    assert_eq!(values, vec![1, 2, 3, 4, 5]);

    let mut rng = rand::thread_rng();
    assert_eq!(numbers(DEFAULT_COUNT, &mut rng).len(), 3);
}

#[test]
fn test_samples_are_drawn_from_input() {
    let mut rng = rand::thread_rng();
    let input = vec![1, 2, 3, 4, 5];

    let one = sample_one(&input, &mut rng).unwrap();
    assert!(input.contains(one));

    let many = sample_many(&input, 3, &mut rng);
    assert_eq!(many.len(), 3);
    assert!(many.iter().all(|v| input.contains(*v)));
    let distinct: HashSet<&i32> = many.into_iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = SeedConfig::with_seed(7);
    let mut first = config.rng();
    let mut second = config.rng();

    let options = CollectionOptions::default().count(4);
    assert_eq!(strings(&options, &mut first), strings(&options, &mut second));
    assert_eq!(
        datetime(DateTimeParts::default(), &mut first),
        datetime(DateTimeParts::default(), &mut second)
    );
}

#[test]
fn test_partial_options_fill_from_defaults() {
    let options: CollectionOptions =
        serde_json::from_str(r#"{"length": 10, "charset": "numeric"}"#).unwrap();
    assert_eq!(options.count, 3);

    let mut rng = rand::thread_rng();
    let values = strings(&options, &mut rng);
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|s| s.len() == 10 && s.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn test_partial_options_accept_custom_charset_string() {
    let options: CollectionOptions =
        serde_json::from_str(r#"{"count": 4, "charset": "xyz"}"#).unwrap();
    assert_eq!(options.string.charset, Charset::custom("xyz").unwrap());

    let mut rng = rand::thread_rng();
    let values = strings(&options, &mut rng);
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|s| s.chars().all(|c| "xyz".contains(c))));
}
