// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`skip`](Self::skip) operator.
pub trait SkipExt<T>: Sized {
    /// Discards the first `n` elements and yields the rest unchanged.
    ///
    /// Skipping past the end of a finite source yields nothing.
    fn skip(self, n: usize) -> Pipeline<T>;
}

impl<T: 'static> SkipExt<T> for Pipeline<T> {
    fn skip(self, n: usize) -> Pipeline<T> {
        if n == 0 {
            return self;
        }
        Pipeline::from_fn(move |sink| {
            let mut skipped = 0;
            self.drive(|value| {
                if skipped < n {
                    skipped += 1;
                    true
                } else {
                    sink(value)
                }
            });
        })
    }
}
