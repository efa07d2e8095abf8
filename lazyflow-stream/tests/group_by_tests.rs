// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{pipeline, KeyValue, Pipeline};
use lazyflow_stream::{GroupByExt, TakeExt};
use lazyflow_test_utils::test_data::{
    animal_dog, animal_spider, mixed_pipeline, person_alice, person_bob, plant_oak, plant_rose,
};
use lazyflow_test_utils::{assert_stops_after, counting_source, drain, produced, DataVariant};

#[test]
fn test_group_by_modulo_sizes() -> anyhow::Result<()> {
    // Arrange
    let source = Pipeline::range(1, 11);

    // Act
    let groups = source.group_by(|n| n % 3);

    // Assert
    assert_eq!(groups[&0].len(), 3);
    assert_eq!(groups[&1].len(), 4);
    assert_eq!(groups[&2].len(), 3);
    assert_eq!(groups[&1], vec![1, 4, 7, 10]);
    Ok(())
}

#[test]
fn test_group_by_keeps_first_seen_key_order() -> anyhow::Result<()> {
    // Arrange
    let source = mixed_pipeline();

    // Act
    let groups = source.group_by(|d| d.variant());

    // Assert
    let keys: Vec<DataVariant> = groups.keys().copied().collect();
    assert_eq!(
        keys,
        vec![DataVariant::Person, DataVariant::Animal, DataVariant::Plant]
    );
    assert_eq!(groups[&DataVariant::Person], vec![person_alice(), person_bob()]);
    assert_eq!(groups[&DataVariant::Animal], vec![animal_dog(), animal_spider()]);
    assert_eq!(groups[&DataVariant::Plant], vec![plant_rose(), plant_oak()]);
    Ok(())
}

#[test]
fn test_group_by_empty_source() -> anyhow::Result<()> {
    // Arrange
    let source = Pipeline::<String>::empty();

    // Act
    let groups = source.group_by(|s| s.len());

    // Assert
    assert!(groups.is_empty());
    Ok(())
}

#[test]
fn test_group_by_accepts_stateful_key_fn() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline!["a", "b", "c", "d", "e"];
    let mut position = 0;

    // Act
    let groups = source.group_by(|_| {
        position += 1;
        position <= 2
    });

    // Assert
    assert_eq!(groups[&true], vec!["a", "b"]);
    assert_eq!(groups[&false], vec!["c", "d", "e"]);
    Ok(())
}

#[test]
fn test_group_by_flow_yields_key_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let words = pipeline!["apple", "bean", "avocado", "cherry", "bread"];

    // Act
    let groups = drain(&words.group_by_flow(|w| w.as_bytes()[0]));

    // Assert
    assert_eq!(
        groups,
        vec![
            KeyValue::new(b'a', vec!["apple", "avocado"]),
            KeyValue::new(b'b', vec!["bean", "bread"]),
            KeyValue::new(b'c', vec!["cherry"]),
        ]
    );
    Ok(())
}

#[test]
fn test_group_by_flow_is_deferred_until_driven() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting_source((1..=6).collect::<Vec<i32>>());

    // Act
    let grouped = source.group_by_flow(|n| n % 2 == 0);
    let before = produced(&counter);
    let first_group = assert_stops_after(&grouped, 1);

    // Assert
    assert_eq!(before, 0);
    assert_eq!(first_group, vec![KeyValue::new(false, vec![1, 3, 5])]);
    assert_eq!(produced(&counter), 6);
    Ok(())
}

#[test]
fn test_group_by_flow_regroups_on_each_run() -> anyhow::Result<()> {
    // Arrange
    let grouped = Pipeline::range(0, 4).group_by_flow(|n| *n < 2).take(1);

    // Act
    let first_run = drain(&grouped);
    let second_run = drain(&grouped);

    // Assert
    assert_eq!(first_run, vec![KeyValue::new(true, vec![0, 1])]);
    assert_eq!(first_run, second_run);
    Ok(())
}
