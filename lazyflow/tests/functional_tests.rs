// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow::prelude::*;
use lazyflow_test_utils::filled_channel;

#[test]
fn test_round_trip_preserves_order() -> anyhow::Result<()> {
    // Arrange
    let input = vec![5, 3, 9, 1, 7];

    // Act
    let out = Pipeline::from_vec(input.clone()).collect();

    // Assert
    assert_eq!(out, input);
    Ok(())
}

#[test]
fn test_filter_keeps_exactly_matching_elements_in_order() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![8, 1, 6, 3, 4, 7, 2];

    // Act
    let evens = source.filter(|n| n % 2 == 0).collect();

    // Assert
    assert_eq!(evens, vec![8, 6, 4, 2]);
    Ok(())
}

#[test]
fn test_map_is_elementwise() -> anyhow::Result<()> {
    // Arrange
    let input = vec![1, 2, 3, 4];

    // Act
    let out = Pipeline::from_vec(input.clone()).map(|n| n * 10 + 1).collect();

    // Assert
    let expected: Vec<_> = input.iter().map(|n| n * 10 + 1).collect();
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn test_take_on_infinite_generator_terminates() -> anyhow::Result<()> {
    // Arrange
    let naturals = Pipeline::infinite(|i| i);

    // Act
    let first_five = naturals.clone().take(5).collect();
    let none = naturals.take(0).collect();

    // Assert
    assert_eq!(first_five, vec![0, 1, 2, 3, 4]);
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn test_distinct_examples() -> anyhow::Result<()> {
    // Arrange
    let repeated = pipeline![1, 2, 2, 3, 3, 3, 4, 4, 4, 4];
    let unique = pipeline![4, 2, 9];

    // Act
    let deduplicated = repeated.distinct().collect();
    let unchanged = unique.distinct().collect();

    // Assert
    assert_eq!(deduplicated, vec![1, 2, 3, 4]);
    assert_eq!(unchanged, vec![4, 2, 9]);
    Ok(())
}

#[test]
fn test_chunk_examples() -> anyhow::Result<()> {
    // Arrange
    let ten = Pipeline::range(1, 11);
    let six = Pipeline::range(1, 7);

    // Act
    let by_three = ten.chunk(3)?.collect();
    let by_two = six.chunk(2)?.collect();

    // Assert
    assert_eq!(
        by_three,
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
    );
    assert_eq!(by_two, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    Ok(())
}

#[test]
fn test_window_examples() -> anyhow::Result<()> {
    // Arrange
    let five = Pipeline::range(1, 6);
    let nine = Pipeline::range(1, 10);

    // Act
    let sliding = five.window(3, 1)?.collect();
    let tumbling = nine.window(3, 3)?.collect();

    // Assert
    assert_eq!(sliding, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    assert_eq!(tumbling, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    Ok(())
}

#[test]
fn test_group_by_modulo_three() -> anyhow::Result<()> {
    // Arrange
    let source = Pipeline::range(1, 11);

    // Act
    let groups = source.group_by(|n| n % 3);

    // Assert
    let sizes: Vec<(i64, usize)> = groups.iter().map(|(k, v)| (*k, v.len())).collect();
    assert_eq!(sizes, vec![(1, 4), (2, 3), (0, 3)]);
    assert_eq!(groups[&0].len(), 3);
    assert_eq!(groups[&1].len(), 4);
    assert_eq!(groups[&2].len(), 3);
    Ok(())
}

#[test]
fn test_partition_even_odd() -> anyhow::Result<()> {
    // Arrange
    let source = Pipeline::range(1, 11);

    // Act
    let (evens, odds) = source.partition(|n| n % 2 == 0);

    // Assert
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    Ok(())
}

#[test]
fn test_combine_truncates_to_shorter() -> anyhow::Result<()> {
    // Arrange
    let numbers = Pipeline::of(1..=5);
    let letters = Pipeline::of(["a", "b", "c"]);

    // Act
    let pairs = numbers.combine(letters).collect();

    // Assert
    assert_eq!(
        pairs,
        vec![Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")]
    );
    Ok(())
}

#[test]
fn test_merge_without_others_is_same_pipeline() -> anyhow::Result<()> {
    // Arrange
    let source = pipeline![1, 2, 3];

    // Act
    let merged = source.clone().merge(Vec::<Pipeline<i32>>::new());

    // Assert
    assert!(Pipeline::ptr_eq(&source, &merged));
    assert_eq!(merged.collect(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_merge_concatenates_in_listed_order() -> anyhow::Result<()> {
    // Arrange
    let first = pipeline![1, 2, 3];
    let second = pipeline![4, 5, 6];
    let third = pipeline![7, 8, 9];

    // Act
    let bound = first.clone().merge([second.clone(), third.clone()]).collect();
    let free = merge([first, second, third]).collect();

    // Assert
    assert_eq!(bound, (1..=9).collect::<Vec<_>>());
    assert_eq!(free, bound);
    Ok(())
}

#[test]
fn test_pure_source_is_idempotent_across_runs() -> anyhow::Result<()> {
    // Arrange
    let composed = Pipeline::range(0, 20).filter(|n| n % 3 == 0).map(|n| n * n);

    // Act
    let first_run = composed.collect();
    let second_run = composed.collect();

    // Assert
    assert_eq!(first_run, second_run);
    assert_eq!(first_run, vec![0, 9, 36, 81, 144, 225, 324]);
    Ok(())
}

#[test]
fn test_channel_source_yields_at_most_once() -> anyhow::Result<()> {
    // Arrange
    let composed = Pipeline::from_channel(filled_channel(vec![1, 2, 3, 4])).map(|n| n + 100);

    // Act
    let first_run = composed.collect();
    let second_run = composed.collect();

    // Assert
    assert_eq!(first_run, vec![101, 102, 103, 104]);
    assert!(second_run.is_empty());
    Ok(())
}
