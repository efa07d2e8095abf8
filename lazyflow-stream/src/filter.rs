// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based filtering.
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let evens = Pipeline::range(1, 11).filter(|n| n % 2 == 0);
//!
//! let mut out = Vec::new();
//! evens.drive(|n| {
//!     out.push(n);
//!     true
//! });
//! assert_eq!(out, vec![2, 4, 6, 8, 10]);
//! ```

use lazyflow_core::Pipeline;

/// Extension trait providing the [`filter`](Self::filter) operator.
pub trait FilterExt<T>: Sized {
    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Relative order is preserved. A stop signal from downstream is passed
    /// straight through to the source.
    fn filter<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T: 'static> FilterExt<T> for Pipeline<T> {
    fn filter<F>(self, predicate: F) -> Pipeline<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            self.drive(|value| if predicate(&value) { sink(value) } else { true });
        })
    }
}
