// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{pipeline, Pipeline};
use lazyflow_stream::{DistinctExt, MapExt, TakeExt};
use lazyflow_test_utils::test_data::{animal_dog, person_alice, person_bob};
use lazyflow_test_utils::{assert_stops_after, counting_source, drain, produced};

#[test]
fn test_distinct_removes_repeats() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![1, 2, 2, 3, 3, 3, 4, 4, 4, 4];

    // Act
    let out = drain(&source.distinct());

    // Assert
    assert_eq!(out, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_distinct_on_distinct_input_is_identity() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![5, 3, 9, 1];

    // Act
    let out = drain(&source.distinct());

    // Assert
    assert_eq!(out, vec![5, 3, 9, 1]);
    Ok(())
}

#[test]
fn test_distinct_keeps_first_occurrence_order() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![
        person_bob(),
        animal_dog(),
        person_bob(),
        person_alice(),
        animal_dog()
    ];

    // Act
    let out = drain(&source.distinct());

    // Assert
    assert_eq!(out, vec![person_bob(), animal_dog(), person_alice()]);
    Ok(())
}

#[test]
fn test_distinct_is_fresh_on_each_run() -> anyhow::Result<()> {
    // Arrange
    let unique = pipeline!["a", "b", "a"].distinct();

    // Act
    let first_run = drain(&unique);
    let second_run = drain(&unique);

    // Assert
    assert_eq!(first_run, vec!["a", "b"]);
    assert_eq!(second_run, vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_distinct_on_infinite_source_with_take() -> anyhow::Result<()> {
    // Arrange
    let cycling = Pipeline::infinite(|i| i % 4).map(|n| n * 10);

    // Act
    let out = drain(&cycling.distinct().take(4));

    // Assert
    assert_eq!(out, vec![0, 10, 20, 30]);
    Ok(())
}

#[test]
fn test_distinct_propagates_stop() -> anyhow::Result<()> {
    // Arrange
    let (source, counter) = counting_source(vec![1, 1, 2, 2, 3, 3]);

    // Act
    let out = assert_stops_after(&source.distinct(), 2);

    // Assert
    assert_eq!(out, vec![1, 2]);
    assert_eq!(produced(&counter), 3);
    Ok(())
}
