// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`take_while`](Self::take_while) operator.
pub trait TakeWhileExt<T>: Sized {
    /// Yields elements while `predicate` holds.
    ///
    /// The first element that fails the predicate is dropped and the source is
    /// stopped; later elements are never examined, even if they would pass.
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let prefix = pipeline![1, 2, 5, 1, 2].take_while(|n| *n < 3);
    ///
    /// let mut out = Vec::new();
    /// prefix.drive(|n| {
    ///     out.push(n);
    ///     true
    /// });
    /// assert_eq!(out, vec![1, 2]);
    /// ```
    fn take_while<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: 'static> TakeWhileExt<T> for Pipeline<T> {
    fn take_while<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            self.drive(|value| predicate(&value) && sink(value));
        })
    }
}
