// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{IntoPipeline, Pipeline};

/// Extension trait providing the [`flat_map`](Self::flat_map) operator.
pub trait FlatMapExt<T>: Sized {
    /// Maps each element to a sub-pipeline and yields the sub-pipelines one
    /// after another, in source order.
    ///
    /// Each sub-pipeline is fully drained before the next source element is
    /// pulled. A stop from downstream ends the current sub-pipeline and the
    /// source together.
    ///
    /// The mapper may return anything that converts into a pipeline:
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let letters = pipeline!["ab", "c"].flat_map(|word| word.chars().collect::<Vec<_>>());
    ///
    /// let mut out = String::new();
    /// letters.drive(|c| {
    ///     out.push(c);
    ///     true
    /// });
    /// assert_eq!(out, "abc");
    /// ```
    fn flat_map<R, P, F>(self, mapper: F) -> Pipeline<R>
    where
        R: 'static,
        P: IntoPipeline<R>,
        F: Fn(T) -> P + Send + Sync + 'static;
}

impl<T: 'static> FlatMapExt<T> for Pipeline<T> {
    fn flat_map<R, P, F>(self, mapper: F) -> Pipeline<R>
    where
        R: 'static,
        P: IntoPipeline<R>,
        F: Fn(T) -> P + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            self.drive(|value| {
                let mut open = true;
                mapper(value).into_pipeline().drive(|inner| {
                    open = sink(inner);
                    open
                });
                open
            });
        })
    }
}
