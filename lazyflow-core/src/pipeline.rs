// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The lazy pipeline type and its producer/sink contract.
//!
//! A [`Pipeline`] owns nothing but a [`Producer`]: a function that, handed a
//! [`Sink`], pushes elements into it one at a time. Every operator builds a new
//! producer that closes over the old one, so composing operators never touches
//! data; driving the outermost producer pulls each element through every stage
//! depth-first.
//!
//! # The early-termination contract
//!
//! A producer must stop calling the sink as soon as the sink returns `false`,
//! and must never call the sink after it has returned. Operators rely on this to
//! bound infinite sources:
//!
//! ```
//! use lazyflow_core::Pipeline;
//!
//! let naturals = Pipeline::infinite(|index| index);
//! let mut seen = Vec::new();
//! naturals.drive(|value| {
//!     seen.push(value);
//!     seen.len() < 3
//! });
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```
//!
//! # Re-running
//!
//! A pipeline may be driven any number of times; each run re-executes the
//! original source. Sources backed by shared data produce the same elements
//! every time. Sources that consume something (a channel, a stateful
//! generator) do not: a second run sees whatever the first run left behind.

use std::fmt;
use std::sync::Arc;

/// Per-element callback handed to a producer.
///
/// Returns `true` to ask for the next element, `false` to stop production.
pub type Sink<'a, T> = dyn FnMut(T) -> bool + 'a;

/// Shared, re-runnable element generator.
pub type Producer<T> = Arc<dyn Fn(&mut Sink<'_, T>) + Send + Sync>;

/// A possibly infinite, lazily produced sequence of `T`.
///
/// Cloning a pipeline is cheap and shares the producer; it never copies the
/// underlying data.
#[must_use = "pipelines do nothing unless driven by a terminal operation"]
pub struct Pipeline<T> {
    producer: Producer<T>,
}

impl<T: 'static> Pipeline<T> {
    /// Creates a pipeline from a custom producer function.
    ///
    /// The function receives the sink and must honour the early-termination
    /// contract described in the [module documentation](self).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    ///
    /// let countdown = Pipeline::from_fn(|sink| {
    ///     for value in (1..=3).rev() {
    ///         if !sink(value) {
    ///             return;
    ///         }
    ///     }
    /// });
    ///
    /// let mut out = Vec::new();
    /// countdown.drive(|v| {
    ///     out.push(v);
    ///     true
    /// });
    /// assert_eq!(out, vec![3, 2, 1]);
    /// ```
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: Fn(&mut Sink<'_, T>) + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Wraps an already shared producer.
    pub fn from_producer(producer: Producer<T>) -> Self {
        Self { producer }
    }

    /// Returns a handle to the producer backing this pipeline.
    #[must_use]
    pub fn producer(&self) -> Producer<T> {
        Arc::clone(&self.producer)
    }

    /// Runs the producer once, feeding every element to `sink` until the sink
    /// returns `false` or the source is exhausted.
    ///
    /// This is the primitive every operator and terminal operation is built on.
    pub fn drive<F>(&self, mut sink: F)
    where
        F: FnMut(T) -> bool,
    {
        (self.producer)(&mut sink);
    }

    /// Returns `true` if both pipelines share the same producer.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.producer, &other.producer)
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("element", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn drive_stops_when_sink_returns_false() {
        let produced = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&produced);
        let pipeline = Pipeline::from_fn(move |sink| {
            for value in 0..10 {
                counter.fetch_add(1, Ordering::SeqCst);
                if !sink(value) {
                    return;
                }
            }
        });

        let mut received = Vec::new();
        pipeline.drive(|value| {
            received.push(value);
            value < 2
        });

        assert_eq!(received, vec![0, 1, 2]);
        assert_eq!(produced.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn clones_share_the_producer() {
        let pipeline = Pipeline::<i32>::empty();
        let copy = pipeline.clone();

        assert!(Pipeline::ptr_eq(&pipeline, &copy));
        assert!(!Pipeline::ptr_eq(&pipeline, &Pipeline::empty()));
    }

    #[test]
    fn pipeline_can_be_driven_repeatedly() {
        let pipeline = Pipeline::from_fn(|sink| {
            let _ = sink(1) && sink(2);
        });

        for _ in 0..3 {
            let mut out = Vec::new();
            pipeline.drive(|v| {
                out.push(v);
                true
            });
            assert_eq!(out, vec![1, 2]);
        }
    }

    #[test]
    fn debug_names_the_element_type() {
        let rendered = format!("{:?}", Pipeline::<u8>::empty());
        assert!(rendered.contains("u8"));
    }
}
