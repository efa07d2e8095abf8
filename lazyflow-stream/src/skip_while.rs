// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`skip_while`](Self::skip_while) operator.
pub trait SkipWhileExt<T>: Sized {
    /// Discards the leading elements that satisfy `predicate`, then yields
    /// everything from the first failing element onward.
    ///
    /// Once skipping has ended the predicate is no longer consulted.
    fn skip_while<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: 'static> SkipWhileExt<T> for Pipeline<T> {
    fn skip_while<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            let mut skipping = true;
            self.drive(|value| {
                if skipping && predicate(&value) {
                    return true;
                }
                skipping = false;
                sink(value)
            });
        })
    }
}
