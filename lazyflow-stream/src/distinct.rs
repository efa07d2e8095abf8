// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;
use std::collections::HashSet;
use std::hash::Hash;

/// Extension trait providing the [`distinct`](Self::distinct) operator.
pub trait DistinctExt<T>: Sized {
    /// Yields only the first occurrence of each value.
    ///
    /// Every distinct value seen during a run is remembered until the run
    /// ends, so memory grows with the number of distinct values. Each run
    /// starts with an empty set.
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let unique = pipeline![1, 2, 2, 3, 3, 3, 4, 4, 4, 4].distinct();
    ///
    /// let mut out = Vec::new();
    /// unique.drive(|n| {
    ///     out.push(n);
    ///     true
    /// });
    /// assert_eq!(out, vec![1, 2, 3, 4]);
    /// ```
    fn distinct(self) -> Pipeline<T>;
}

impl<T> DistinctExt<T> for Pipeline<T>
where
    T: Eq + Hash + Clone + 'static,
{
    fn distinct(self) -> Pipeline<T> {
        Pipeline::from_fn(move |sink| {
            let mut seen = HashSet::new();
            self.drive(|value| {
                if seen.contains(&value) {
                    return true;
                }
                seen.insert(value.clone());
                sink(value)
            });
        })
    }
}
