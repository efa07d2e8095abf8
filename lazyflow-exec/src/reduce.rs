// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`reduce`](Self::reduce) terminal operation.
pub trait ReduceExt<T> {
    /// Left-folds the pipeline in source order, starting from `initial`.
    ///
    /// An empty pipeline returns `initial` unchanged.
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    /// use lazyflow_exec::ReduceExt;
    ///
    /// let sum = Pipeline::range(1, 5).reduce(0, |acc, n| acc + n);
    /// let csv = Pipeline::range(1, 4).reduce(String::new(), |mut acc, n| {
    ///     if !acc.is_empty() {
    ///         acc.push(',');
    ///     }
    ///     acc.push_str(&n.to_string());
    ///     acc
    /// });
    ///
    /// assert_eq!(sum, 10);
    /// assert_eq!(csv, "1,2,3");
    /// ```
    fn reduce<A, F>(&self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, T) -> A;
}

impl<T: 'static> ReduceExt<T> for Pipeline<T> {
    fn reduce<A, F>(&self, initial: A, mut reducer: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        // None only while the reducer runs.
        let mut state = Some(initial);
        self.drive(|value| {
            state = state.take().map(|acc| reducer(acc, value));
            true
        });
        state.expect("accumulator is restored after every element")
    }
}
