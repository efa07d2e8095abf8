// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{pipeline, Pipeline};
use lazyflow_stream::{FlatMapExt, TakeExt};
use lazyflow_test_utils::{assert_stops_after, counting_naturals, drain, produced};

#[test]
fn test_flat_map_concatenates_in_source_order() -> anyhow::Result<()> {
    // Arrange
    let source = Pipeline::range(1, 4);

    // Act
    let out = drain(&source.flat_map(|n| Pipeline::range(0, n)));

    // Assert
    assert_eq!(out, vec![0, 0, 1, 0, 1, 2]);
    Ok(())
}

#[test]
fn test_flat_map_accepts_collections() -> anyhow::Result<()> {
    // Arrange
    let sentences = pipeline!["hello world", "lazy flow"];

    // Act
    let words = drain(&sentences.flat_map(|s| s.split(' ').collect::<Vec<_>>()));

    // Assert
    assert_eq!(words, vec!["hello", "world", "lazy", "flow"]);
    Ok(())
}

#[test]
fn test_flat_map_skips_empty_sub_pipelines() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![0i64, 2, 0, 1];

    // Act
    let out = drain(&source.flat_map(|n| Pipeline::range(0, n)));

    // Assert
    assert_eq!(out, vec![0, 1, 0]);
    Ok(())
}

#[test]
fn test_flat_map_stop_inside_sub_pipeline_stops_everything() -> anyhow::Result<()> {
    // Arrange
    let (outer, outer_count) = counting_naturals();
    let expanded = outer.flat_map(|n| vec![n; 3]);

    // Act
    let out = assert_stops_after(&expanded, 4);

    // Assert
    assert_eq!(out, vec![0, 0, 0, 1]);
    assert_eq!(produced(&outer_count), 2);
    Ok(())
}

#[test]
fn test_flat_map_of_infinite_inner_with_take() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![7usize, 8];

    // Act
    let out = drain(&source.flat_map(|n| Pipeline::infinite(move |i| n + i)).take(3));

    // Assert
    assert_eq!(out, vec![7, 8, 9]);
    Ok(())
}
