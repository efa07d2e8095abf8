// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping by a derived key.
//!
//! Grouping cannot be lazy: a key's members are only known once the whole
//! source has been read. [`group_by`](GroupByExt::group_by) drains the source
//! and returns the groups directly. [`group_by_flow`](GroupByExt::group_by_flow)
//! defers that work until the returned pipeline is driven, then drains the
//! source and yields one [`KeyValue`] per group.
//!
//! Both keep keys in first-seen order and elements in source order within a
//! key.

use indexmap::IndexMap;
use lazyflow_core::{KeyValue, Pipeline};
use std::hash::Hash;

/// Extension trait providing the [`group_by`](Self::group_by) and
/// [`group_by_flow`](Self::group_by_flow) operators.
pub trait GroupByExt<T>: Sized {
    /// Drains the pipeline into groups keyed by `key_fn`.
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let groups = Pipeline::range(1, 11).group_by(|n| n % 3);
    ///
    /// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 0]);
    /// assert_eq!(groups[&0], vec![3, 6, 9]);
    /// assert_eq!(groups[&1], vec![1, 4, 7, 10]);
    /// ```
    fn group_by<K, F>(&self, key_fn: F) -> IndexMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Returns a pipeline of groups, computed each time it is driven.
    fn group_by_flow<K, F>(self, key_fn: F) -> Pipeline<KeyValue<K, Vec<T>>>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static;
}

impl<T: 'static> GroupByExt<T> for Pipeline<T> {
    fn group_by<K, F>(&self, mut key_fn: F) -> IndexMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
        self.drive(|value| {
            groups.entry(key_fn(&value)).or_default().push(value);
            true
        });
        groups
    }

    fn group_by_flow<K, F>(self, key_fn: F) -> Pipeline<KeyValue<K, Vec<T>>>
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            let groups = self.group_by(&key_fn);
            for (key, members) in groups {
                if !sink(KeyValue::new(key, members)) {
                    return;
                }
            }
        })
    }
}
