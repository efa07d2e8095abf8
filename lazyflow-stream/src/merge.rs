// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential merging of several pipelines.
//!
//! Merging drains each pipeline completely, in the order given, before moving
//! on to the next one; it is [`concat`](crate::ConcatExt::concat) generalised to
//! any number of inputs. Nothing is interleaved and nothing runs concurrently.
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let all = pipeline![1, 2, 3].merge([pipeline![4, 5, 6], pipeline![7, 8, 9]]);
//!
//! let mut out = Vec::new();
//! all.drive(|n| {
//!     out.push(n);
//!     true
//! });
//! assert_eq!(out, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

use lazyflow_core::Pipeline;

/// Extension trait providing the [`merge`](Self::merge) operator.
pub trait MergeExt<T>: Sized {
    /// Yields `self` followed by each of `others` in order.
    ///
    /// With no other pipelines this returns `self` itself, sharing the same
    /// producer, rather than a wrapper around it.
    fn merge<I>(self, others: I) -> Pipeline<T>
    where
        I: IntoIterator<Item = Pipeline<T>>;
}

impl<T: 'static> MergeExt<T> for Pipeline<T> {
    fn merge<I>(self, others: I) -> Pipeline<T>
    where
        I: IntoIterator<Item = Pipeline<T>>,
    {
        let others: Vec<Pipeline<T>> = others.into_iter().collect();
        if others.is_empty() {
            return self;
        }
        let mut all = Vec::with_capacity(others.len() + 1);
        all.push(self);
        all.extend(others);
        merge(all)
    }
}

/// Yields every pipeline in `pipelines` one after another.
///
/// An empty list gives an empty pipeline.
pub fn merge<T, I>(pipelines: I) -> Pipeline<T>
where
    T: 'static,
    I: IntoIterator<Item = Pipeline<T>>,
{
    let pipelines: Vec<Pipeline<T>> = pipelines.into_iter().collect();
    if pipelines.is_empty() {
        return Pipeline::empty();
    }
    Pipeline::from_fn(move |sink| {
        for pipeline in &pipelines {
            let mut open = true;
            pipeline.drive(|value| {
                open = sink(value);
                open
            });
            if !open {
                return;
            }
        }
    })
}
