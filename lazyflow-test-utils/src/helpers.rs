// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Receiver;
use lazyflow_core::Pipeline;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Drives `pipeline` to completion and returns every element in order.
pub fn drain<T: 'static>(pipeline: &Pipeline<T>) -> Vec<T> {
    let mut out = Vec::new();
    pipeline.drive(|value| {
        out.push(value);
        true
    });
    out
}

/// Drives `pipeline` until `n` elements have been received.
///
/// Safe on infinite pipelines.
pub fn drain_prefix<T: 'static>(pipeline: &Pipeline<T>, n: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }
    pipeline.drive(|value| {
        out.push(value);
        out.len() < n
    });
    out
}

/// Drives `pipeline`, asking it to stop after `n` elements, and panics if the
/// sink is called again after it returned `false`.
///
/// Returns the received elements so callers can also check the prefix.
///
/// # Panics
///
/// Panics when the producer ignores the stop signal.
pub fn assert_stops_after<T: 'static>(pipeline: &Pipeline<T>, n: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(n);
    let mut stopped = false;
    pipeline.drive(|value| {
        assert!(
            !stopped,
            "Producer called the sink after it returned false"
        );
        out.push(value);
        stopped = out.len() >= n;
        !stopped
    });
    out
}

/// A source over `values` that counts how many elements it has produced,
/// across every run.
pub fn counting_source<T>(values: Vec<T>) -> (Pipeline<T>, Arc<AtomicUsize>)
where
    T: Clone + Send + Sync + 'static,
{
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&produced);
    let values: Arc<[T]> = values.into();
    let pipeline = Pipeline::from_fn(move |sink| {
        for value in values.iter() {
            counter.fetch_add(1, Ordering::SeqCst);
            if !sink(value.clone()) {
                return;
            }
        }
    });
    (pipeline, produced)
}

/// An unbounded source `0, 1, 2, ...` that counts how many elements it has
/// produced.
pub fn counting_naturals() -> (Pipeline<usize>, Arc<AtomicUsize>) {
    let produced = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&produced);
    let pipeline = Pipeline::infinite(move |index| {
        counter.fetch_add(1, Ordering::SeqCst);
        index
    });
    (pipeline, produced)
}

/// Returns the number of elements a counting source has produced.
pub fn produced(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Creates a closed channel already holding `values`.
pub fn filled_channel<T>(values: Vec<T>) -> Receiver<T> {
    let (tx, rx) = async_channel::unbounded();
    for value in values {
        tx.try_send(value)
            .expect("unbounded channel with a live receiver accepts every value");
    }
    rx
}

/// Thread-safe log of observed values, for use inside `peek` and `for_each`
/// closures.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Mutex<Vec<T>>,
}

impl<T: Clone> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: T) {
        self.values.lock().push(value);
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: Mutex::new(Vec::new()),
        }
    }
}
