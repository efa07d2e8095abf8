// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{IntoPipeline, Pipeline};

/// Extension trait providing the [`concat`](Self::concat) operator.
pub trait ConcatExt<T>: Sized {
    /// Yields every element of `self`, then every element of `other`.
    ///
    /// `other` is only started once `self` is exhausted, and not at all if the
    /// consumer stops while `self` is still running.
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let joined = pipeline![1, 2].concat(vec![3, 4]);
    ///
    /// let mut out = Vec::new();
    /// joined.drive(|n| {
    ///     out.push(n);
    ///     true
    /// });
    /// assert_eq!(out, vec![1, 2, 3, 4]);
    /// ```
    fn concat<P>(self, other: P) -> Pipeline<T>
    where
        P: IntoPipeline<T>;
}

impl<T: 'static> ConcatExt<T> for Pipeline<T> {
    fn concat<P>(self, other: P) -> Pipeline<T>
    where
        P: IntoPipeline<T>,
    {
        let other = other.into_pipeline();
        Pipeline::from_fn(move |sink| {
            let mut open = true;
            self.drive(|value| {
                open = sink(value);
                open
            });
            if open {
                other.drive(|value| sink(value));
            }
        })
    }
}
