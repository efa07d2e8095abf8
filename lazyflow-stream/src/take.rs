// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`take`](Self::take) operator.
pub trait TakeExt<T>: Sized {
    /// Yields at most the first `n` elements.
    ///
    /// The source is told to stop as soon as the `n`th element has been
    /// delivered, so it is never asked for element `n + 1`. This is what makes
    /// `take` the standard way to bound an infinite source. `take(0)` is an
    /// empty pipeline that never runs the source at all.
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let squares = Pipeline::infinite(|i| i * i).take(4);
    ///
    /// let mut out = Vec::new();
    /// squares.drive(|v| {
    ///     out.push(v);
    ///     true
    /// });
    /// assert_eq!(out, vec![0, 1, 4, 9]);
    /// ```
    fn take(self, n: usize) -> Pipeline<T>;
}

impl<T: 'static> TakeExt<T> for Pipeline<T> {
    fn take(self, n: usize) -> Pipeline<T> {
        if n == 0 {
            return Pipeline::empty();
        }
        Pipeline::from_fn(move |sink| {
            let mut remaining = n;
            self.drive(|value| {
                remaining -= 1;
                sink(value) && remaining > 0
            });
        })
    }
}
