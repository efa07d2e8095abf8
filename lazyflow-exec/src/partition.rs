// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`partition`](Self::partition) terminal operation.
pub trait PartitionExt<T> {
    /// Drains the pipeline once, splitting it into the elements that satisfy
    /// `predicate` and those that do not.
    ///
    /// Both halves keep source order.
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    /// use lazyflow_exec::PartitionExt;
    ///
    /// let (evens, odds) = Pipeline::range(1, 11).partition(|n| n % 2 == 0);
    /// assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    /// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    /// ```
    fn partition<F>(&self, predicate: F) -> (Vec<T>, Vec<T>)
    where
        F: FnMut(&T) -> bool;
}

impl<T: 'static> PartitionExt<T> for Pipeline<T> {
    fn partition<F>(&self, mut predicate: F) -> (Vec<T>, Vec<T>)
    where
        F: FnMut(&T) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        self.drive(|value| {
            if predicate(&value) {
                matching.push(value);
            } else {
                rest.push(value);
            }
            true
        });
        (matching, rest)
    }
}
