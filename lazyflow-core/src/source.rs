// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source constructors: every way of starting a pipeline.

use crate::pipeline::Pipeline;
use async_channel::Receiver;
use parking_lot::RwLock;
use std::sync::Arc;

impl<T: 'static> Pipeline<T> {
    /// Creates a pipeline that yields nothing.
    pub fn empty() -> Self {
        Self::from_fn(|_| {})
    }

    /// Creates a pipeline that yields exactly one value.
    pub fn single(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_fn(move |sink| {
            sink(value.clone());
        })
    }

    /// Creates a pipeline over an owned collection, yielding its elements in order.
    ///
    /// The elements move into shared storage once; each run clones them out.
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    ///
    /// let words = Pipeline::from_vec(vec!["a", "b"]);
    /// let mut out = Vec::new();
    /// words.drive(|w| {
    ///     out.push(w);
    ///     true
    /// });
    /// assert_eq!(out, ["a", "b"]);
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        let values: Arc<[T]> = values.into();
        Self::from_fn(move |sink| {
            for value in values.iter() {
                if !sink(value.clone()) {
                    return;
                }
            }
        })
    }

    /// Creates a pipeline over a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_vec(values.to_vec())
    }

    /// Creates a pipeline from anything iterable; the iterator is collected eagerly.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Send + Sync,
    {
        Self::from_vec(values.into_iter().collect())
    }

    /// Creates a pipeline over a collection that stays shared with the caller.
    ///
    /// The collection is read element by element while the pipeline is driven,
    /// so changes made between construction and consumption are observed. The
    /// lock is only held while copying out a single element.
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    /// use parking_lot::RwLock;
    /// use std::sync::Arc;
    ///
    /// let shared = Arc::new(RwLock::new(vec![1, 2]));
    /// let pipeline = Pipeline::from_shared(Arc::clone(&shared));
    /// shared.write().push(3);
    ///
    /// let mut out = Vec::new();
    /// pipeline.drive(|v| {
    ///     out.push(v);
    ///     true
    /// });
    /// assert_eq!(out, vec![1, 2, 3]);
    /// ```
    pub fn from_shared(values: Arc<RwLock<Vec<T>>>) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_fn(move |sink| {
            let mut index = 0;
            loop {
                let next = values.read().get(index).cloned();
                let Some(value) = next else {
                    return;
                };
                if !sink(value) {
                    return;
                }
                index += 1;
            }
        })
    }

    /// Creates an unbounded pipeline whose element at position `index` is
    /// `generator(index)`, starting from 0.
    ///
    /// The producer never ends by itself; bound it with `take`, `take_while`
    /// or a short-circuiting terminal operation.
    pub fn infinite<F>(generator: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
    {
        Self::from_fn(move |sink| {
            let mut index = 0usize;
            while sink(generator(index)) {
                index = index.wrapping_add(1);
            }
        })
    }

    /// Creates a pipeline that drains a channel until it is closed.
    ///
    /// Elements are received with a blocking wait. The receiver is consumed by
    /// the first run: driving the same pipeline again only sees elements sent
    /// after that run stopped, and nothing once the channel is closed and empty.
    pub fn from_channel(receiver: Receiver<T>) -> Self
    where
        T: Send,
    {
        Self::from_fn(move |sink| {
            while let Ok(value) = receiver.recv_blocking() {
                if !sink(value) {
                    return;
                }
            }
        })
    }
}

impl Pipeline<i64> {
    /// Creates a pipeline over the half-open integer range `[start, end)`.
    ///
    /// Empty and reversed ranges yield nothing.
    pub fn range(start: i64, end: i64) -> Self {
        if start >= end {
            return Self::empty();
        }
        Self::from_fn(move |sink| {
            for value in start..end {
                if !sink(value) {
                    return;
                }
            }
        })
    }
}

/// Creates a pipeline from a list of values.
///
/// ```
/// use lazyflow_core::{pipeline, Pipeline};
///
/// let numbers: Pipeline<i32> = pipeline![1, 2, 3];
/// let none: Pipeline<i32> = pipeline![];
/// # let _ = (numbers, none);
/// ```
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::Pipeline::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Pipeline::from_vec(::std::vec![$($value),+])
    };
}
