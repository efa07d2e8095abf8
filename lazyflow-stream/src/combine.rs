// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Position-wise pairing of two pipelines.
//!
//! # Buffering
//!
//! Unlike every other operator in this crate, `combine` and `combine_with` are
//! not lazy with respect to their inputs. Each run first drains **both**
//! pipelines to completion into memory, and only then emits
//! `min(left.len(), right.len())` results. Consequences:
//!
//! - combining with an unbounded pipeline never returns; bound it with
//!   [`take`](crate::TakeExt::take) first
//! - memory use is proportional to the combined length of both inputs
//! - side effects in either input run for every element, even the unpaired ones
//!
//! The shorter side is never padded.
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let pairs = pipeline![1, 2, 3, 4, 5].combine(pipeline!["a", "b", "c"]);
//!
//! let mut out = Vec::new();
//! pairs.drive(|pair| {
//!     out.push(pair.into_tuple());
//!     true
//! });
//! assert_eq!(out, vec![(1, "a"), (2, "b"), (3, "c")]);
//! ```

use lazyflow_core::{Pair, Pipeline};

/// Extension trait providing the [`combine`](Self::combine) and
/// [`combine_with`](Self::combine_with) operators.
pub trait CombineExt<T>: Sized {
    /// Pairs the `i`th element of `self` with the `i`th element of `other`.
    fn combine<U>(self, other: Pipeline<U>) -> Pipeline<Pair<T, U>>
    where
        U: 'static;

    /// Like [`combine`](Self::combine), but merges each pair with `combiner`.
    fn combine_with<U, R, F>(self, other: Pipeline<U>, combiner: F) -> Pipeline<R>
    where
        U: 'static,
        R: 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static;
}

impl<T: 'static> CombineExt<T> for Pipeline<T> {
    fn combine<U>(self, other: Pipeline<U>) -> Pipeline<Pair<T, U>>
    where
        U: 'static,
    {
        self.combine_with(other, Pair::new)
    }

    fn combine_with<U, R, F>(self, other: Pipeline<U>, combiner: F) -> Pipeline<R>
    where
        U: 'static,
        R: 'static,
        F: Fn(T, U) -> R + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            let left = buffer(&self);
            let right = buffer(&other);
            trace!(
                "combine buffered {} left and {} right elements",
                left.len(),
                right.len()
            );
            for (a, b) in left.into_iter().zip(right) {
                if !sink(combiner(a, b)) {
                    return;
                }
            }
        })
    }
}

fn buffer<T: 'static>(pipeline: &Pipeline<T>) -> Vec<T> {
    let mut values = Vec::new();
    pipeline.drive(|value| {
        values.push(value);
        true
    });
    values
}
