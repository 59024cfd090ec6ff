//! Synthetic dataset generation tests.

use ordinal_core::{
    config::GeneratorConfig,
    error::DataError,
    generator::{generate, Generator},
    types::{Deprivation, Group, Health, Level},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn degenerate_config(record_count: usize) -> GeneratorConfig {
    GeneratorConfig {
        record_count,
        seed: 1,
        group_weights: vec![1.0, 0.0],
        health_weights: vec![1.0, 0.0, 0.0, 0.0, 0.0],
        deprivation_weights: vec![0.0, 1.0, 0.0, 0.0, 0.0],
        ..GeneratorConfig::default()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn generates_requested_record_count() {
    for n in [0usize, 1, 4, 200, 5000] {
        let dataset = generate(&GeneratorConfig::default().with_record_count(n)).unwrap();
        assert_eq!(dataset.len(), n, "Expected {n} records, got {}", dataset.len());
    }
}

#[test]
fn ids_are_unique_and_dense_from_one() {
    let dataset = generate(&GeneratorConfig::default()).unwrap();
    for (i, r) in dataset.records.iter().enumerate() {
        assert_eq!(r.id, i as u64 + 1, "Record at position {i} has id {}", r.id);
    }
}

#[test]
fn zero_records_is_an_empty_dataset() {
    let dataset = generate(&GeneratorConfig::default().with_record_count(0)).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.seed, GeneratorConfig::default().seed);
}

#[test]
fn every_value_lies_in_its_level_set() {
    let dataset = generate(&GeneratorConfig::default()).unwrap();
    for r in dataset.records() {
        assert!(Group::from_code(r.group.code()).is_some());
        assert!((1..=5).contains(&r.health.code()), "health {:?}", r.health);
        assert!((1..=5).contains(&r.deprivation.code()), "deprivation {:?}", r.deprivation);
    }
}

#[test]
fn degenerate_distributions_pin_every_record() {
    let dataset = generate(&degenerate_config(4)).unwrap();

    assert_eq!(dataset.len(), 4);
    for r in dataset.records() {
        assert_eq!(r.group, Group::Zero);
        assert_eq!(r.health, Health::VeryGood);
        assert_eq!(r.deprivation, Deprivation::Second);
    }
}

#[test]
fn published_weights_shape_the_sample() {
    // 5000 draws: group 0 should sit near 70%, and health should fall
    // off from Very Good towards Very Poor.
    let dataset = generate(&GeneratorConfig::default()).unwrap();
    let n = dataset.len() as f64;

    let group_zero = dataset.filter_group(Group::Zero).len() as f64 / n;
    assert!(
        (group_zero - 0.7).abs() < 0.03,
        "Expected ~70% in group 0, got {:.1}%",
        group_zero * 100.0
    );

    let very_good = dataset.records().iter().filter(|r| r.health == Health::VeryGood).count();
    let very_poor = dataset.records().iter().filter(|r| r.health == Health::VeryPoor).count();
    assert!(
        very_good > very_poor * 4,
        "Very Good ({very_good}) should dwarf Very Poor ({very_poor})"
    );
}

#[test]
fn filter_group_partitions_the_dataset() {
    let dataset = generate(&GeneratorConfig::default_test()).unwrap();
    let zero = dataset.filter_group(Group::Zero);
    let one = dataset.filter_group(Group::One);

    assert_eq!(zero.len() + one.len(), dataset.len());
    assert!(zero.iter().all(|r| r.group == Group::Zero));
    assert!(one.iter().all(|r| r.group == Group::One));
}

#[test]
fn malformed_distributions_are_rejected() {
    let mut negative = GeneratorConfig::default_test();
    negative.health_weights = vec![0.5, -0.1, 0.2, 0.2, 0.2];
    assert!(matches!(
        Generator::new(&negative),
        Err(DataError::InvalidDistribution { attribute: "health", .. })
    ));

    let mut short = GeneratorConfig::default_test();
    short.deprivation_weights = vec![0.5, 0.5];
    assert!(matches!(
        Generator::new(&short),
        Err(DataError::InvalidDistribution { attribute: "deprivation", .. })
    ));

    let mut zero_sum = GeneratorConfig::default_test();
    zero_sum.group_weights = vec![0.0, 0.0];
    assert!(matches!(
        generate(&zero_sum),
        Err(DataError::InvalidDistribution { attribute: "group", .. })
    ));
}
